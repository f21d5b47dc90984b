use std::io::Write;

use tracing::instrument;

use super::{confirm, created_table, id_table};
use crate::application::services::LoadbalancerService;
use crate::cli::args::{
    AclCommands, BackendCommands, FrontendCommands, LoadbalancerCommands, RouteCommands,
};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::{
    CreateAclParams, CreateBackendParams, CreateFrontendParams, CreateLoadbalancerParams,
    CreateRouteParams,
};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(
    ctx: &ServiceContainer,
    command: LoadbalancerCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    let lbs = ctx.client()?.loadbalancers();
    match command {
        LoadbalancerCommands::Create { name, dcslug, kind } => {
            let params = CreateLoadbalancerParams {
                name: name.clone(),
                dcslug: dcslug.unwrap_or_default(),
                kind: kind.unwrap_or_default(),
            };
            let created = lbs.create(&params)?;
            created_table(
                out,
                &["Loadbalancer Name", "Loadbalancer Id", "Status"],
                &name,
                &created,
            )
        }
        LoadbalancerCommands::Get { loadbalancer_id } => {
            output::single(out, &lbs.read(&loadbalancer_id)?)
        }
        LoadbalancerCommands::List => output::list(out, &lbs.list()?),
        LoadbalancerCommands::Delete { loadbalancer_id } => {
            confirm(ctx)?;
            let reply = lbs.delete(&loadbalancer_id)?;
            output::status_line(out, reply.status.as_str())
        }
        LoadbalancerCommands::Acl { command } => acl(ctx, &lbs, command, out),
        LoadbalancerCommands::Frontend { command } => frontend(ctx, &lbs, command, out),
        LoadbalancerCommands::Backend { command } => backend(ctx, &lbs, command, out),
        LoadbalancerCommands::Route { command } => route(ctx, &lbs, command, out),
    }
}

fn acl(
    ctx: &ServiceContainer,
    lbs: &LoadbalancerService,
    command: AclCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        AclCommands::Create {
            loadbalancer_id,
            name,
            condition_type,
            frontend_id,
            value,
        } => {
            let params = CreateAclParams {
                name: name.clone(),
                conditiontype: condition_type.unwrap_or_default(),
                frontend_id: frontend_id.unwrap_or_default(),
                value: value.unwrap_or_default(),
            };
            let created = lbs.create_acl(&loadbalancer_id, &params)?;
            created_table(out, &["Acl Name", "Acl Id", "Status"], &name, &created)
        }
        AclCommands::Get {
            loadbalancer_id,
            acl_id,
        } => output::single(out, &lbs.read_acl(&loadbalancer_id, &acl_id)?),
        AclCommands::List { loadbalancer_id } => output::list(out, &lbs.list_acls(&loadbalancer_id)?),
        AclCommands::Delete {
            loadbalancer_id,
            acl_id,
        } => {
            confirm(ctx)?;
            let reply = lbs.delete_acl(&loadbalancer_id, &acl_id)?;
            output::status_line(out, reply.status.as_str())
        }
    }
}

fn frontend(
    ctx: &ServiceContainer,
    lbs: &LoadbalancerService,
    command: FrontendCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        FrontendCommands::Create {
            loadbalancer_id,
            name,
            proto,
            port,
            certificate_id,
            algorithm,
            redirecthttps,
            cookie,
        } => {
            let params = CreateFrontendParams {
                name: name.clone(),
                proto: proto.unwrap_or_default(),
                port: port.unwrap_or_default(),
                certificate_id: certificate_id.unwrap_or_default(),
                algorithm: algorithm.unwrap_or_default(),
                redirecthttps: redirecthttps.unwrap_or_default(),
                cookie: cookie.unwrap_or_default(),
            };
            let created = lbs.create_frontend(&loadbalancer_id, &params)?;
            created_table(
                out,
                &["Frontend Name", "Frontend Id", "Status"],
                &name,
                &created,
            )
        }
        FrontendCommands::Get {
            loadbalancer_id,
            frontend_id,
        } => output::single(out, &lbs.read_frontend(&loadbalancer_id, &frontend_id)?),
        FrontendCommands::List { loadbalancer_id } => {
            output::list(out, &lbs.list_frontends(&loadbalancer_id)?)
        }
        FrontendCommands::Delete {
            loadbalancer_id,
            frontend_id,
        } => {
            confirm(ctx)?;
            let reply = lbs.delete_frontend(&loadbalancer_id, &frontend_id)?;
            output::status_line(out, reply.status.as_str())
        }
    }
}

fn backend(
    ctx: &ServiceContainer,
    lbs: &LoadbalancerService,
    command: BackendCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        BackendCommands::Create {
            loadbalancer_id,
            frontend_id,
            cloud_id,
            port,
        } => {
            let params = CreateBackendParams {
                frontend_id,
                cloudid: cloud_id.clone(),
                backend_port: port.unwrap_or_default(),
            };
            let created = lbs.create_backend(&loadbalancer_id, &params)?;
            created_table(
                out,
                &["Backend Name", "Backend Id", "Status"],
                &cloud_id,
                &created,
            )
        }
        BackendCommands::Get {
            loadbalancer_id,
            backend_id,
        } => output::single(out, &lbs.read_backend(&loadbalancer_id, &backend_id)?),
        BackendCommands::List { loadbalancer_id } => {
            output::list(out, &lbs.list_backends(&loadbalancer_id)?)
        }
        BackendCommands::Delete {
            loadbalancer_id,
            backend_id,
        } => {
            confirm(ctx)?;
            let reply = lbs.delete_backend(&loadbalancer_id, &backend_id)?;
            output::status_line(out, reply.status.as_str())
        }
    }
}

fn route(
    ctx: &ServiceContainer,
    lbs: &LoadbalancerService,
    command: RouteCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        RouteCommands::Create {
            loadbalancer_id,
            frontend_id,
            acl_id,
            route_condition,
            target_groups,
        } => {
            let params = CreateRouteParams {
                frontend_id,
                acl_id,
                route_condition: route_condition.unwrap_or_default(),
                target_groups: target_groups.unwrap_or_default(),
            };
            let created = lbs.create_route(&loadbalancer_id, &params)?;
            id_table(out, &["Route Id", "Status"], &created)
        }
        RouteCommands::Get {
            loadbalancer_id,
            route_id,
        } => output::single(out, &lbs.read_route(&loadbalancer_id, &route_id)?),
        RouteCommands::List { loadbalancer_id } => output::list(out, &lbs.list_routes(&loadbalancer_id)?),
        RouteCommands::Delete {
            loadbalancer_id,
            route_id,
        } => {
            confirm(ctx)?;
            let reply = lbs.delete_route(&loadbalancer_id, &route_id)?;
            output::status_line(out, reply.status.as_str())
        }
    }
}
