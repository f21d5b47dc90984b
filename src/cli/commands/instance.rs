use std::io::Write;

use tracing::instrument;

use super::confirm;
use crate::cli::args::{BackupCommands, CreateInstanceArgs, InstanceCommands, SnapshotCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::{CloudHostname, CreateCloudInstanceParams};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(ctx: &ServiceContainer, command: InstanceCommands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        InstanceCommands::Create(args) => create(ctx, args, out),
        InstanceCommands::Get { instance_id } => {
            let instance = ctx.client()?.instances().read(&instance_id)?;
            output::single(out, &instance)
        }
        InstanceCommands::List => output::list(out, &ctx.client()?.instances().list()?),
        InstanceCommands::Delete { instance_id } => {
            let instances = ctx.client()?.instances();
            confirm(ctx)?;
            let reply = instances.delete(&instance_id)?;
            output::status_table(out, reply.status.as_str())
        }
        InstanceCommands::Snapshot { command } => snapshot(ctx, command, out),
        InstanceCommands::Backup { command } => backup(ctx, command, out),
    }
}

fn create(ctx: &ServiceContainer, args: CreateInstanceArgs, out: &mut dyn Write) -> CliResult<()> {
    let params = CreateCloudInstanceParams {
        dcslug: args.dcslug.unwrap_or_default(),
        image: args.image.unwrap_or_default(),
        planid: args.planid.unwrap_or_default(),
        auth: args.auth.unwrap_or_default(),
        root_password: args.root_password.unwrap_or_default(),
        firewall: args.firewall.unwrap_or_default(),
        enablebackup: args.enablebackup.unwrap_or_default(),
        support: args.support.unwrap_or_default(),
        management: args.management.unwrap_or_default(),
        billingcycle: args.billingcycle.unwrap_or_default(),
        backupid: args.backupid.unwrap_or_default(),
        snapshotid: args.snapshotid.unwrap_or_default(),
        sshkeys: args.sshkeys.unwrap_or_default(),
        cloud: vec![CloudHostname {
            hostname: args.hostname.clone(),
        }],
    };

    let deployed = ctx.client()?.instances().create(&params)?;
    output::table(
        out,
        &["Instance Name", "ID", "Password", "Ipv4", "Status"],
        std::iter::once(vec![
            args.hostname,
            deployed.cloudid.to_string(),
            deployed.password.to_string(),
            deployed.ipv4.to_string(),
            deployed.status.to_string(),
        ]),
    )
}

fn snapshot(ctx: &ServiceContainer, command: SnapshotCommands, out: &mut dyn Write) -> CliResult<()> {
    let instances = ctx.client()?.instances();
    match command {
        SnapshotCommands::Create { instance_id } => {
            let created = instances.create_snapshot(&instance_id)?;
            output::status_line(out, created.status.as_str())
        }
        SnapshotCommands::Delete {
            instance_id,
            snapshot_id,
        } => {
            confirm(ctx)?;
            let reply = instances.delete_snapshot(&instance_id, &snapshot_id)?;
            output::status_table(out, reply.status.as_str())
        }
    }
}

fn backup(ctx: &ServiceContainer, command: BackupCommands, out: &mut dyn Write) -> CliResult<()> {
    let instances = ctx.client()?.instances();
    match command {
        BackupCommands::Enable { instance_id } => {
            let reply = instances.enable_backup(&instance_id)?;
            output::status_line(out, reply.status.as_str())
        }
        BackupCommands::Disable { instance_id } => {
            confirm(ctx)?;
            let reply = instances.disable_backup(&instance_id)?;
            output::status_table(out, reply.status.as_str())
        }
    }
}
