use std::io::Write;

use tracing::instrument;

use super::attachment::{self, AttachmentKind};
use super::{confirm, created_table};
use crate::application::services::AutoScalingService;
use crate::cli::args::{AutoScalingCommands, CreateAutoScalingArgs, PolicyCommands, ScheduleCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::{parse_bool, CreateAutoScalingParams, CreatePolicyParams, CreateScheduleParams};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(
    ctx: &ServiceContainer,
    command: AutoScalingCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    // flag errors are reported before token errors
    if let AutoScalingCommands::Create(args) = &command {
        public_ip_enabled(args)?;
    }
    let groups = ctx.client()?.autoscaling();
    match command {
        AutoScalingCommands::Create(args) => create(&groups, args, out),
        AutoScalingCommands::Get { autoscaling_id } => {
            output::single(out, &groups.read(&autoscaling_id)?)
        }
        AutoScalingCommands::List => output::list(out, &groups.list()?),
        AutoScalingCommands::Delete {
            autoscaling_id,
            name,
        } => {
            confirm(ctx)?;
            let reply = groups.delete(&autoscaling_id, &name)?;
            output::status_line(out, reply.status.as_str())
        }
        AutoScalingCommands::Policy { command } => match command {
            PolicyCommands::Create {
                autoscaling_id,
                name,
                kind,
                compare,
                value,
                adjust,
                period,
                cooldown,
                product,
            } => {
                let params = CreatePolicyParams {
                    name: name.clone(),
                    productid: autoscaling_id,
                    kind: kind.unwrap_or_default(),
                    compare: compare.unwrap_or_default(),
                    value: value.unwrap_or_default(),
                    adjust: adjust.unwrap_or_default(),
                    period: period.unwrap_or_default(),
                    cooldown: cooldown.unwrap_or_default(),
                    product: product.unwrap_or_default(),
                };
                let created = groups.create_policy(&params)?;
                created_table(out, &["Policy Name", "Policy Id", "Status"], &name, &created)
            }
            PolicyCommands::Get {
                autoscaling_id,
                policy_id,
            } => output::single(out, &groups.read_policy(&autoscaling_id, &policy_id)?),
            PolicyCommands::List { autoscaling_id } => {
                output::list(out, &groups.list_policies(&autoscaling_id)?)
            }
            PolicyCommands::Delete { policy_id } => {
                confirm(ctx)?;
                let reply = groups.delete_policy(&policy_id)?;
                output::status_line(out, reply.status.as_str())
            }
        },
        AutoScalingCommands::Schedule { command } => match command {
            ScheduleCommands::Create {
                autoscaling_id,
                name,
                desiredsize,
                recurrence,
                start_date,
            } => {
                let params = CreateScheduleParams {
                    name: name.clone(),
                    desiredsize: desiredsize.unwrap_or_default(),
                    recurrence: recurrence.unwrap_or_default(),
                    start_date: start_date.unwrap_or_default(),
                };
                let created = groups.create_schedule(&autoscaling_id, &params)?;
                created_table(
                    out,
                    &["Schedule Name", "Schedule Id", "Status"],
                    &name,
                    &created,
                )
            }
            ScheduleCommands::Get {
                autoscaling_id,
                schedule_id,
            } => output::single(out, &groups.read_schedule(&autoscaling_id, &schedule_id)?),
            ScheduleCommands::List { autoscaling_id } => {
                output::list(out, &groups.list_schedules(&autoscaling_id)?)
            }
            ScheduleCommands::Delete {
                autoscaling_id,
                schedule_id,
            } => {
                confirm(ctx)?;
                let reply = groups.delete_schedule(&autoscaling_id, &schedule_id)?;
                output::status_line(out, reply.status.as_str())
            }
        },
        AutoScalingCommands::Loadbalancer { command } => attachment::run(
            ctx,
            &groups,
            "AutoScaling",
            AttachmentKind::Loadbalancer,
            command,
            out,
        ),
        AutoScalingCommands::Securitygroup { command } => attachment::run(
            ctx,
            &groups,
            "AutoScaling",
            AttachmentKind::SecurityGroup,
            command,
            out,
        ),
        AutoScalingCommands::Targetgroup { command } => attachment::run(
            ctx,
            &groups,
            "AutoScaling",
            AttachmentKind::TargetGroup,
            command,
            out,
        ),
    }
}

fn public_ip_enabled(args: &CreateAutoScalingArgs) -> CliResult<bool> {
    parse_bool(args.public_ip_enabled.as_deref().unwrap_or_default())
        .map_err(|e| CliError::InvalidArgs(format!("--public-ip-enabled: {}", e)))
}

fn create(
    groups: &AutoScalingService,
    args: CreateAutoScalingArgs,
    out: &mut dyn Write,
) -> CliResult<()> {
    let public_ip_enabled = public_ip_enabled(&args)?;

    let params = CreateAutoScalingParams {
        name: args.name.clone(),
        os_disk_size: args.os_disk_size,
        dcslug: args.dcslug.unwrap_or_default(),
        minsize: args.minsize.unwrap_or_default(),
        maxsize: args.maxsize.unwrap_or_default(),
        desiredsize: args.desiredsize.unwrap_or_default(),
        planid: args.planid.unwrap_or_default(),
        planname: args.planname.unwrap_or_default(),
        instance_templateid: args.instance_templateid.unwrap_or_default(),
        public_ip_enabled,
        vpc: args.vpc.unwrap_or_default(),
        load_balancers: args.load_balancers.unwrap_or_default(),
        security_groups: args.security_groups.unwrap_or_default(),
        policies: Vec::new(),
        schedules: Vec::new(),
        stackid: args.stackid.unwrap_or_default(),
        stackimage: args.stackimage.unwrap_or_default(),
        target_groups: args.target_groups.unwrap_or_default(),
    };

    let created = groups.create(&params)?;
    created_table(
        out,
        &["Autoscaling Name", "Autoscaling Id", "Status"],
        &args.name,
        &created,
    )
}
