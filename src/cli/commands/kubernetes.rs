use std::io::Write;

use tracing::instrument;

use super::attachment::{self, AttachmentKind};
use super::{confirm, created_table};
use crate::cli::args::{AttachmentCommands, CreateKubernetesArgs, KubernetesCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::CreateKubernetesParams;
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(
    ctx: &ServiceContainer,
    command: KubernetesCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        KubernetesCommands::Create(args) => create(ctx, args, out),
        KubernetesCommands::Get { cluster_id } => {
            output::single(out, &ctx.client()?.kubernetes().read(&cluster_id)?)
        }
        KubernetesCommands::List => output::list(out, &ctx.client()?.kubernetes().list()?),
        KubernetesCommands::Delete { cluster_id } => {
            let clusters = ctx.client()?.kubernetes();
            confirm(ctx)?;
            let reply = clusters.delete(&cluster_id)?;
            output::status_line(out, reply.status.as_str())
        }
        KubernetesCommands::Loadbalancer { command } => {
            attach(ctx, AttachmentKind::Loadbalancer, command, out)
        }
        KubernetesCommands::Securitygroup { command } => {
            attach(ctx, AttachmentKind::SecurityGroup, command, out)
        }
        KubernetesCommands::Targetgroup { command } => {
            attach(ctx, AttachmentKind::TargetGroup, command, out)
        }
    }
}

fn attach(
    ctx: &ServiceContainer,
    kind: AttachmentKind,
    command: AttachmentCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    let clusters = ctx.client()?.kubernetes();
    attachment::run(ctx, &clusters, "Kubernetes", kind, command, out)
}

fn create(ctx: &ServiceContainer, args: CreateKubernetesArgs, out: &mut dyn Write) -> CliResult<()> {
    // the positional name labels the cluster unless a label is given explicitly
    let cluster_label = args
        .cluster_label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| args.name.clone());
    let params = CreateKubernetesParams {
        dcslug: args.dcslug.unwrap_or_default(),
        cluster_label,
        cluster_version: args.cluster_version.unwrap_or_default(),
        nodepools: Vec::new(),
        auth: args.auth.unwrap_or_default(),
        vpc: args.vpc.unwrap_or_default(),
        security_groups: args.security_groups.unwrap_or_default(),
    };

    let created = ctx.client()?.kubernetes().create(&params)?;
    created_table(
        out,
        &["Kubernetes Name", "Kubernetes Id", "Status"],
        &args.name,
        &created,
    )
}
