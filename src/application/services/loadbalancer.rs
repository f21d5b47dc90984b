//! Load balancers and their ACLs, frontends, backends and routes

use tracing::debug;

use crate::application::api::{created, field, find_by, first, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    Acl, Backend, CreateAclParams, CreateBackendParams, CreateFrontendParams,
    CreateLoadbalancerParams, CreateRouteParams, Created, Frontend, Loadbalancer, Route,
    StatusReply,
};

pub struct LoadbalancerService {
    api: ApiClient,
}

impl LoadbalancerService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create(&self, params: &CreateLoadbalancerParams) -> ApplicationResult<Created> {
        debug!("loadbalancer: create name={}", params.name);
        let value = self.api.post("loadbalancer/add", params)?;
        created(&value, &["id", "loadbalancerid"])
    }

    pub fn read(&self, lb_id: &str) -> ApplicationResult<Loadbalancer> {
        let value = self.api.get(format!("loadbalancer/{}", lb_id))?;
        first(field(&value, "loadbalancers")?, "loadbalancer", lb_id)
    }

    pub fn list(&self) -> ApplicationResult<Vec<Loadbalancer>> {
        let value = self.api.get("loadbalancer")?;
        field(&value, "loadbalancers")
    }

    pub fn delete(&self, lb_id: &str) -> ApplicationResult<StatusReply> {
        debug!("loadbalancer: destroy {}", lb_id);
        let value = self.api.delete(format!("loadbalancer/{}/destroy", lb_id))?;
        status(&value)
    }

    fn delete_child(&self, lb_id: &str, kind: &str, child_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .delete(format!("loadbalancer/{}/{}/{}", lb_id, kind, child_id))?;
        status(&value)
    }

    pub fn create_acl(&self, lb_id: &str, params: &CreateAclParams) -> ApplicationResult<Created> {
        let value = self.api.post(format!("loadbalancer/{}/acl", lb_id), params)?;
        created(&value, &["id"])
    }

    pub fn read_acl(&self, lb_id: &str, acl_id: &str) -> ApplicationResult<Acl> {
        find_by(self.list_acls(lb_id)?, "acl", acl_id, |a| &a.id)
    }

    pub fn list_acls(&self, lb_id: &str) -> ApplicationResult<Vec<Acl>> {
        Ok(self.read(lb_id)?.acls)
    }

    pub fn delete_acl(&self, lb_id: &str, acl_id: &str) -> ApplicationResult<StatusReply> {
        self.delete_child(lb_id, "acl", acl_id)
    }

    pub fn create_frontend(
        &self,
        lb_id: &str,
        params: &CreateFrontendParams,
    ) -> ApplicationResult<Created> {
        let value = self
            .api
            .post(format!("loadbalancer/{}/frontend", lb_id), params)?;
        created(&value, &["id", "frontendid"])
    }

    pub fn read_frontend(&self, lb_id: &str, frontend_id: &str) -> ApplicationResult<Frontend> {
        find_by(self.list_frontends(lb_id)?, "frontend", frontend_id, |f| &f.id)
    }

    pub fn list_frontends(&self, lb_id: &str) -> ApplicationResult<Vec<Frontend>> {
        Ok(self.read(lb_id)?.frontends)
    }

    pub fn delete_frontend(&self, lb_id: &str, frontend_id: &str) -> ApplicationResult<StatusReply> {
        self.delete_child(lb_id, "frontend", frontend_id)
    }

    pub fn create_backend(
        &self,
        lb_id: &str,
        params: &CreateBackendParams,
    ) -> ApplicationResult<Created> {
        let value = self
            .api
            .post(format!("loadbalancer/{}/backend", lb_id), params)?;
        created(&value, &["id", "backendid"])
    }

    pub fn read_backend(&self, lb_id: &str, backend_id: &str) -> ApplicationResult<Backend> {
        find_by(self.list_backends(lb_id)?, "backend", backend_id, |b| &b.id)
    }

    pub fn list_backends(&self, lb_id: &str) -> ApplicationResult<Vec<Backend>> {
        Ok(self.read(lb_id)?.backends)
    }

    pub fn delete_backend(&self, lb_id: &str, backend_id: &str) -> ApplicationResult<StatusReply> {
        self.delete_child(lb_id, "backend", backend_id)
    }

    pub fn create_route(&self, lb_id: &str, params: &CreateRouteParams) -> ApplicationResult<Created> {
        let value = self.api.post(format!("loadbalancer/{}/route", lb_id), params)?;
        created(&value, &["id"])
    }

    pub fn read_route(&self, lb_id: &str, route_id: &str) -> ApplicationResult<Route> {
        find_by(self.list_routes(lb_id)?, "route", route_id, |r| &r.id)
    }

    pub fn list_routes(&self, lb_id: &str) -> ApplicationResult<Vec<Route>> {
        Ok(self.read(lb_id)?.routes)
    }

    pub fn delete_route(&self, lb_id: &str, route_id: &str) -> ApplicationResult<StatusReply> {
        self.delete_child(lb_id, "route", route_id)
    }
}
