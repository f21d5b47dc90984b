use std::io::Write;

use tracing::instrument;

use super::{confirm, created_table, id_table};
use crate::cli::args::{FirewallCommands, FirewallRuleCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::{CreateFirewallParams, CreateFirewallRuleParams};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(ctx: &ServiceContainer, command: FirewallCommands, out: &mut dyn Write) -> CliResult<()> {
    let firewalls = ctx.client()?.firewalls();
    match command {
        FirewallCommands::Create { name } => {
            let created = firewalls.create(&CreateFirewallParams { name: name.clone() })?;
            created_table(
                out,
                &["Firewall Name", "Firewall Id", "Status"],
                &name,
                &created,
            )
        }
        FirewallCommands::Get { firewall_id } => output::single(out, &firewalls.read(&firewall_id)?),
        FirewallCommands::List => output::list(out, &firewalls.list()?),
        FirewallCommands::Delete { firewall_id } => {
            confirm(ctx)?;
            let reply = firewalls.delete(&firewall_id)?;
            output::status_line(out, reply.status.as_str())
        }
        FirewallCommands::Rule { command } => match command {
            FirewallRuleCommands::Create {
                firewall_id,
                kind,
                service,
                protocol,
                port,
                addresses,
            } => {
                let params = CreateFirewallRuleParams {
                    kind: kind.unwrap_or_default(),
                    service: service.unwrap_or_default(),
                    protocol: protocol.unwrap_or_default(),
                    port: port.unwrap_or_default(),
                    addresses: addresses.unwrap_or_default(),
                };
                let created = firewalls.create_rule(&firewall_id, &params)?;
                id_table(out, &["Firewallrule Id", "Status"], &created)
            }
            FirewallRuleCommands::Get {
                firewall_id,
                rule_id,
            } => output::single(out, &firewalls.read_rule(&firewall_id, &rule_id)?),
            FirewallRuleCommands::List { firewall_id } => {
                output::list(out, &firewalls.list_rules(&firewall_id)?)
            }
            FirewallRuleCommands::Delete {
                firewall_id,
                rule_id,
            } => {
                confirm(ctx)?;
                let reply = firewalls.delete_rule(&firewall_id, &rule_id)?;
                output::status_line(out, reply.status.as_str())
            }
        },
    }
}
