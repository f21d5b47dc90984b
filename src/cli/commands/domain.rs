use std::io::Write;

use tracing::instrument;

use super::confirm;
use crate::cli::args::{DomainCommands, RecordCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::{CreateDnsRecordParams, CreateDomainParams};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(ctx: &ServiceContainer, command: DomainCommands, out: &mut dyn Write) -> CliResult<()> {
    let dns = ctx.client()?.dns();
    match command {
        DomainCommands::Create { domain } => {
            let reply = dns.create_domain(&CreateDomainParams {
                domain: domain.clone(),
            })?;
            output::table(
                out,
                &["Domain", "Status"],
                std::iter::once(vec![domain, reply.status.to_string()]),
            )
        }
        DomainCommands::Get { domain } => output::single(out, &dns.read_domain(&domain)?),
        DomainCommands::List => output::list(out, &dns.list_domains()?),
        DomainCommands::Delete { domain } => {
            confirm(ctx)?;
            let reply = dns.delete_domain(&domain)?;
            output::status_table(out, reply.status.as_str())
        }
        DomainCommands::Records { command } => match command {
            RecordCommands::Create {
                domain,
                kind,
                hostname,
                value,
                ttl,
                port_type,
                port,
                priority,
                weight,
            } => {
                let params = CreateDnsRecordParams {
                    kind: kind.unwrap_or_default(),
                    hostname: hostname.unwrap_or_default(),
                    value: value.unwrap_or_default(),
                    ttl: ttl.unwrap_or_default(),
                    porttype: port_type.unwrap_or_default(),
                    port: port.unwrap_or_default(),
                    priority: priority.unwrap_or_default(),
                    weight: weight.unwrap_or_default(),
                };
                let created = dns.create_record(&domain, &params)?;
                output::table(
                    out,
                    &["Domain", "Record Id", "Record Name", "Status"],
                    std::iter::once(vec![
                        domain,
                        created.id.to_string(),
                        params.hostname,
                        created.status.to_string(),
                    ]),
                )
            }
            RecordCommands::List { domain } => output::list(out, &dns.list_records(&domain)?),
            RecordCommands::Delete { domain, record_id } => {
                confirm(ctx)?;
                let reply = dns.delete_record(&domain, &record_id)?;
                output::status_line(out, reply.status.as_str())
            }
        },
    }
}
