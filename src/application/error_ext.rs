//! Context for settings file I/O

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Tag an I/O failure on the settings file with what was attempted and where.
pub trait FileContext<T> {
    fn on_file(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> FileContext<T> for io::Result<T> {
    fn on_file(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{} {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_tagged_then_message_names_action_and_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let err = result.on_file("read", Path::new("/tmp/uthoctl.yaml")).unwrap_err();

        assert_eq!(err.to_string(), "operation failed: read /tmp/uthoctl.yaml: gone");
    }
}
