//! Attachment subcommands shared by kubernetes and autoscaling

use std::io::Write;

use super::{confirm, created_table, id_table};
use crate::application::services::Attachments;
use crate::cli::args::AttachmentCommands;
use crate::cli::output;
use crate::cli::CliResult;
use crate::infrastructure::di::ServiceContainer;

/// Which kind of resource an attachment command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Loadbalancer,
    SecurityGroup,
    TargetGroup,
}

/// `parent` labels the owning resource in create output, e.g. `Kubernetes`.
pub fn run<A: Attachments>(
    ctx: &ServiceContainer,
    service: &A,
    parent: &str,
    kind: AttachmentKind,
    command: AttachmentCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        AttachmentCommands::Create { id, resource_id } => match kind {
            AttachmentKind::Loadbalancer => {
                let created = service.create_loadbalancer(&id, &resource_id)?;
                let header = format!("{} Loadbalancer Id", parent);
                id_table(out, &[header.as_str(), "Status"], &created)
            }
            AttachmentKind::SecurityGroup => {
                let created = service.create_security_group(&id, &resource_id)?;
                id_table(out, &["Securitygroup id", "Status"], &created)
            }
            AttachmentKind::TargetGroup => {
                let created = service.create_target_group(&id, &resource_id)?;
                created_table(
                    out,
                    &["Targetgroup Name", "Targetgroup Id", "Status"],
                    &resource_id,
                    &created,
                )
            }
        },
        AttachmentCommands::Get { id, resource_id } => match kind {
            AttachmentKind::Loadbalancer => {
                output::single(out, &service.read_loadbalancer(&id, &resource_id)?)
            }
            AttachmentKind::SecurityGroup => {
                output::single(out, &service.read_security_group(&id, &resource_id)?)
            }
            AttachmentKind::TargetGroup => {
                output::single(out, &service.read_target_group(&id, &resource_id)?)
            }
        },
        AttachmentCommands::List { id } => match kind {
            AttachmentKind::Loadbalancer => output::list(out, &service.list_loadbalancers(&id)?),
            AttachmentKind::SecurityGroup => output::list(out, &service.list_security_groups(&id)?),
            AttachmentKind::TargetGroup => output::list(out, &service.list_target_groups(&id)?),
        },
        AttachmentCommands::Delete { id, resource_id } => {
            confirm(ctx)?;
            let reply = match kind {
                AttachmentKind::Loadbalancer => service.delete_loadbalancer(&id, &resource_id)?,
                AttachmentKind::SecurityGroup => service.delete_security_group(&id, &resource_id)?,
                AttachmentKind::TargetGroup => service.delete_target_group(&id, &resource_id)?,
            };
            output::status_line(out, reply.status.as_str())
        }
    }
}
