//! Command dispatch: one handler module per resource family
//!
//! Every handler maps positional ids and flags onto one client call and
//! renders the result to `out`. Nothing is written when the call fails.

mod attachment;
mod autoscaling;
mod domain;
mod firewall;
mod instance;
mod kubernetes;
mod loadbalancer;
mod objectstorage;
mod session;
mod targetgroup;
mod vpc;

use std::io::Write;

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::Created;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::prompt::CONFIRM_QUESTION;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: Cli, ctx: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    match cli.command {
        Commands::Auth { token } => session::auth(ctx, token, out),
        Commands::Account { command } => session::account(ctx, command, out),
        Commands::Action { command } => session::action(ctx, command, out),
        Commands::Instance { command } => instance::run(ctx, command, out),
        Commands::Kubernetes { command } => kubernetes::run(ctx, command, out),
        Commands::Loadbalancer { command } => loadbalancer::run(ctx, command, out),
        Commands::Firewall { command } => firewall::run(ctx, command, out),
        Commands::Domain { command } => domain::run(ctx, command, out),
        Commands::Vpc { command } => vpc::run(ctx, command, out),
        Commands::Objectstorage { command } => objectstorage::run(ctx, command, out),
        Commands::Targetgroup { command } => targetgroup::run(ctx, command, out),
        Commands::Autoscaling { command } => autoscaling::run(ctx, command, out),
        Commands::Config { command } => session::config(ctx, command, out),
        Commands::Completion { shell } => session::completion(shell, out),
    }
}

/// Ask before a destructive call; a "no" aborts the command.
fn confirm(ctx: &ServiceContainer) -> CliResult<()> {
    let confirmed = ctx
        .prompter
        .confirm(CONFIRM_QUESTION)
        .map_err(|source| InfraError::Prompt { source })?;
    if !confirmed {
        debug!("confirmation declined");
        return Err(CliError::Aborted);
    }
    Ok(())
}

/// `<name>, <id>, <status>` row printed after most creates.
fn created_table(
    out: &mut dyn Write,
    headers: &[&str; 3],
    name: &str,
    created: &Created,
) -> CliResult<()> {
    output::table(
        out,
        headers,
        std::iter::once(vec![
            name.to_string(),
            created.id.to_string(),
            created.status.to_string(),
        ]),
    )
}

/// `<id>, <status>` row printed by creates that have no name.
fn id_table(out: &mut dyn Write, headers: &[&str; 2], created: &Created) -> CliResult<()> {
    output::table(
        out,
        headers,
        std::iter::once(vec![created.id.to_string(), created.status.to_string()]),
    )
}

/// `<name>, <status>` row printed by creates that return no id.
fn name_table(out: &mut dyn Write, headers: &[&str; 2], name: &str, status: &str) -> CliResult<()> {
    output::table(
        out,
        headers,
        std::iter::once(vec![name.to_string(), status.to_string()]),
    )
}
