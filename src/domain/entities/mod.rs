//! Resource entities as returned by the Utho API, and the request
//! parameters sent to create them.

mod account;
mod attachment;
mod autoscaling;
mod dns;
mod firewall;
mod instance;
mod kubernetes;
mod loadbalancer;
mod objectstorage;
mod targetgroup;
mod vpc;

pub use account::*;
pub use attachment::*;
pub use autoscaling::*;
pub use dns::*;
pub use firewall::*;
pub use instance::*;
pub use kubernetes::*;
pub use loadbalancer::*;
pub use objectstorage::*;
pub use targetgroup::*;
pub use vpc::*;

use serde::Deserialize;

use crate::domain::Scalar;

/// Outcome of a create call: the new resource id plus the API status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Created {
    pub id: Scalar,
    pub status: Scalar,
    pub message: Scalar,
}

/// The `{"status", "message"}` envelope every response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusReply {
    pub status: Scalar,
    pub message: Scalar,
}

impl StatusReply {
    /// The API reports failures in-band with `"status": "error"`.
    pub fn is_error(&self) -> bool {
        self.status.as_str().eq_ignore_ascii_case("error")
    }
}
