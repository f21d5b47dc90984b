//! Domain layer: API resource entities and request parameters
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod fields;

pub use entities::*;
pub use error::DomainError;
pub use fields::{parse_bool, Scalar};
