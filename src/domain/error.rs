//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid values and lookups against API data.
/// These are independent of transport and configuration concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid boolean value: {0:?} (expected true/false)")]
    InvalidBool(String),
}

impl DomainError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
