use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::Scalar;

/// Confirmation phrase the API requires before destroying a server.
pub const DESTROY_INSTANCE_CONFIRMATION: &str =
    "I am aware this action will delete data and server permanently";

/// A compute instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CloudInstance {
    pub cloudid: Scalar,
    pub hostname: Scalar,
    pub cpu: Scalar,
    pub ram: Scalar,
    pub disksize: Scalar,
    pub ip: Scalar,
    pub billingcycle: Scalar,
    pub dclocation: DcLocation,
    pub image: InstanceImage,
    pub status: Scalar,
    #[serde(deserialize_with = "list_or_null")]
    pub snapshots: Vec<Snapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DcLocation {
    pub location: Scalar,
    pub country: Scalar,
    pub dc: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstanceImage {
    pub distribution: Scalar,
    pub version: Scalar,
    pub image: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub id: Scalar,
    pub name: Scalar,
    pub size: Scalar,
    pub created_at: Scalar,
}

/// Response of a deploy call; the root password is only ever shown here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeployedInstance {
    pub cloudid: Scalar,
    pub password: Scalar,
    pub ipv4: Scalar,
    pub status: Scalar,
    pub message: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloudHostname {
    pub hostname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCloudInstanceParams {
    pub dcslug: String,
    pub image: String,
    pub planid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub root_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub enablebackup: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub support: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub management: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billingcycle: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub backupid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snapshotid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sshkeys: String,
    pub cloud: Vec<CloudHostname>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCloudInstanceParams {
    pub confirm: String,
}

impl Default for DeleteCloudInstanceParams {
    fn default() -> Self {
        Self {
            confirm: DESTROY_INSTANCE_CONFIRMATION.to_string(),
        }
    }
}
