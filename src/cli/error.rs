//! CLI-level errors (wraps infrastructure errors)

use clap::error::ErrorKind;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    /// The user declined the confirmation prompt.
    #[error("Operation aborted.")]
    Aborted,

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(_) | CliError::Aborted | CliError::InvalidArgs(_) => {
                crate::exitcode::FAILURE
            }
        }
    }
}

/// Exit code for a rejected command line; help and version output succeed.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => crate::exitcode::OK,
        _ => crate::exitcode::FAILURE,
    }
}
