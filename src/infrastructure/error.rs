//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Failures of a single HTTP exchange with the API.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {context}: {source}")]
    Request {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no token found, please login first (hint: run 'uthoctl auth')")]
    MissingToken,

    #[error("invalid API token: {reason} (hint: run 'uthoctl auth')")]
    InvalidToken { reason: String },

    #[error("invalid API url {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("error reading input: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<TransportError> for InfraError {
    fn from(e: TransportError) -> Self {
        Self::Application(ApplicationError::Transport(e))
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
