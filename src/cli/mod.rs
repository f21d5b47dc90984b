//! CLI layer: argument parsing, command dispatch and output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
mod tables;

pub use args::{Cli, Commands};
pub use commands::execute_command;
pub use error::{usage_exit_code, CliError, CliResult};
