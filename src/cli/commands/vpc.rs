use std::io::Write;

use tracing::instrument;

use super::{confirm, created_table};
use crate::cli::args::VpcCommands;
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::CreateVpcParams;
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(ctx: &ServiceContainer, command: VpcCommands, out: &mut dyn Write) -> CliResult<()> {
    let vpcs = ctx.client()?.vpcs();
    match command {
        VpcCommands::Create {
            name,
            dcslug,
            planid,
            network,
            size,
        } => {
            let params = CreateVpcParams {
                dcslug: dcslug.unwrap_or_default(),
                name: name.clone(),
                planid: planid.unwrap_or_default(),
                network: network.unwrap_or_default(),
                size: size.unwrap_or_default(),
            };
            let created = vpcs.create(&params)?;
            created_table(out, &["Vpc Name", "Vpc Id", "Status"], &name, &created)
        }
        VpcCommands::Get { vpc_id } => output::single(out, &vpcs.read(&vpc_id)?),
        VpcCommands::List => output::list(out, &vpcs.list()?),
        VpcCommands::Delete { vpc_id } => {
            confirm(ctx)?;
            let reply = vpcs.delete(&vpc_id)?;
            output::status_line(out, reply.status.as_str())
        }
    }
}
