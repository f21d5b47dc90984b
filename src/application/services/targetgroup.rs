//! Target groups and their targets

use tracing::debug;

use crate::application::api::{created, field, find_by, first, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    CreateTargetGroupParams, CreateTargetParams, Created, DeleteTargetGroupParams, StatusReply,
    Target, TargetGroup,
};

pub struct TargetGroupService {
    api: ApiClient,
}

impl TargetGroupService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create(&self, params: &CreateTargetGroupParams) -> ApplicationResult<Created> {
        debug!("targetgroup: create name={}", params.name);
        let value = self.api.post("targetgroup", params)?;
        created(&value, &["id", "targetgroupid"])
    }

    pub fn read(&self, tg_id: &str) -> ApplicationResult<TargetGroup> {
        let value = self.api.get(format!("targetgroup/{}", tg_id))?;
        first(field(&value, "targetgroups")?, "target group", tg_id)
    }

    pub fn list(&self) -> ApplicationResult<Vec<TargetGroup>> {
        let value = self.api.get("targetgroup")?;
        field(&value, "targetgroups")
    }

    pub fn delete(&self, tg_id: &str, name: &str) -> ApplicationResult<StatusReply> {
        debug!("targetgroup: delete {} ({})", tg_id, name);
        let params = DeleteTargetGroupParams {
            name: name.to_string(),
        };
        let value = self.api.delete_with(format!("targetgroup/{}", tg_id), &params)?;
        status(&value)
    }

    pub fn create_target(&self, tg_id: &str, params: &CreateTargetParams) -> ApplicationResult<Created> {
        let value = self.api.post(format!("targetgroup/{}/target", tg_id), params)?;
        created(&value, &["id", "targetid"])
    }

    pub fn read_target(&self, tg_id: &str, target_id: &str) -> ApplicationResult<Target> {
        find_by(self.list_targets(tg_id)?, "target", target_id, |t| &t.id)
    }

    pub fn list_targets(&self, tg_id: &str) -> ApplicationResult<Vec<Target>> {
        Ok(self.read(tg_id)?.targets)
    }

    pub fn delete_target(&self, tg_id: &str, target_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .delete(format!("targetgroup/{}/target/{}", tg_id, target_id))?;
        status(&value)
    }
}
