//! Application layer: the typed Utho API client and its resource services
//!
//! This layer maps resource operations onto API requests and depends on
//! the I/O boundary traits only.

pub mod api;
pub mod client;
pub mod error;
pub mod error_ext;
pub mod services;

pub use api::ApiClient;
pub use client::UthoClient;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::FileContext;
