//! Local and account-level commands: auth, account, action, config, completion

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::{info, instrument};

use crate::cli::args::{AccountCommands, ActionCommands, Cli, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

const TOKEN_PROMPT: &str = "Enter your api token: ";

#[instrument(skip_all)]
pub fn auth(ctx: &ServiceContainer, token: Option<String>, out: &mut dyn Write) -> CliResult<()> {
    let token = match token.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => read_token(ctx)?,
    };

    ctx.store.save_token(&token)?;
    info!("token saved");
    output::line(
        out,
        &format!("Token saved successfully at {}", ctx.store.path().display()),
    )
}

/// Prompt until a non-blank token is entered.
fn read_token(ctx: &ServiceContainer) -> CliResult<String> {
    loop {
        let token = ctx
            .prompter
            .read_secret(TOKEN_PROMPT)
            .map_err(|source| InfraError::Prompt { source })?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }
}

#[instrument(skip_all)]
pub fn account(
    ctx: &ServiceContainer,
    command: AccountCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        AccountCommands::Get => {
            let user = ctx.client()?.account().read()?;
            output::single(out, &user)
        }
    }
}

#[instrument(skip_all)]
pub fn action(ctx: &ServiceContainer, command: ActionCommands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ActionCommands::List => output::list(out, &ctx.client()?.actions().list()?),
    }
}

pub fn config(ctx: &ServiceContainer, command: ConfigCommands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ConfigCommands::Path => output::line(out, &ctx.store.path().display().to_string()),
        ConfigCommands::Show => {
            let yaml = ctx.settings.masked().to_yaml()?;
            write!(out, "{}", yaml).map_err(|e| InfraError::io("write output", e))?;
            Ok(())
        }
    }
}

pub fn completion(shell: Shell, out: &mut dyn Write) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    Ok(())
}
