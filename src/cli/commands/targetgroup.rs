use std::io::Write;

use tracing::instrument;

use super::{confirm, created_table, id_table};
use crate::cli::args::{CreateTargetGroupArgs, TargetCommands, TargetGroupCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::{CreateTargetGroupParams, CreateTargetParams};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(
    ctx: &ServiceContainer,
    command: TargetGroupCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    let groups = ctx.client()?.target_groups();
    match command {
        TargetGroupCommands::Create(args) => {
            let name = args.name.clone();
            let created = groups.create(&create_params(args))?;
            created_table(
                out,
                &["Targetgroup Name", "Targetgroup Id", "Status"],
                &name,
                &created,
            )
        }
        TargetGroupCommands::Get { targetgroup_id } => {
            output::single(out, &groups.read(&targetgroup_id)?)
        }
        TargetGroupCommands::List => output::list(out, &groups.list()?),
        TargetGroupCommands::Delete {
            targetgroup_id,
            name,
        } => {
            confirm(ctx)?;
            let reply = groups.delete(&targetgroup_id, &name)?;
            output::status_line(out, reply.status.as_str())
        }
        TargetGroupCommands::Target { command } => match command {
            TargetCommands::Create {
                targetgroup_id,
                backend_protocol,
                backend_port,
                ip,
                cloudid,
            } => {
                let params = CreateTargetParams {
                    backend_protocol: backend_protocol.unwrap_or_default(),
                    backend_port: backend_port.unwrap_or_default(),
                    ip: ip.unwrap_or_default(),
                    cloudid: cloudid.unwrap_or_default(),
                };
                let created = groups.create_target(&targetgroup_id, &params)?;
                id_table(out, &["Target Id", "Status"], &created)
            }
            TargetCommands::Get {
                targetgroup_id,
                target_id,
            } => output::single(out, &groups.read_target(&targetgroup_id, &target_id)?),
            TargetCommands::List { targetgroup_id } => {
                output::list(out, &groups.list_targets(&targetgroup_id)?)
            }
            TargetCommands::Delete {
                targetgroup_id,
                target_id,
            } => {
                confirm(ctx)?;
                let reply = groups.delete_target(&targetgroup_id, &target_id)?;
                output::status_line(out, reply.status.as_str())
            }
        },
    }
}

fn create_params(args: CreateTargetGroupArgs) -> CreateTargetGroupParams {
    CreateTargetGroupParams {
        name: args.name,
        protocol: args.protocol.unwrap_or_default(),
        port: args.port.unwrap_or_default(),
        health_check_path: args.health_check_path.unwrap_or_default(),
        health_check_protocol: args.health_check_protocol.unwrap_or_default(),
        health_check_interval: args.health_check_interval.unwrap_or_default(),
        health_check_timeout: args.health_check_timeout.unwrap_or_default(),
        healthy_threshold: args.healthy_threshold.unwrap_or_default(),
        unhealthy_threshold: args.unhealthy_threshold.unwrap_or_default(),
    }
}
