//! Compute instances, their snapshots and backups

use tracing::debug;

use crate::application::api::{created, decode, field, first, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    CloudInstance, CreateCloudInstanceParams, Created, DeleteCloudInstanceParams,
    DeployedInstance, StatusReply,
};

pub struct InstanceService {
    api: ApiClient,
}

impl InstanceService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Deploy a new instance. The response carries the generated root password.
    pub fn create(&self, params: &CreateCloudInstanceParams) -> ApplicationResult<DeployedInstance> {
        debug!("instance: create dcslug={} planid={}", params.dcslug, params.planid);
        let value = self.api.post("cloud/deploy", params)?;
        decode(value, "deployed instance")
    }

    pub fn read(&self, instance_id: &str) -> ApplicationResult<CloudInstance> {
        let value = self.api.get(format!("cloud/{}", instance_id))?;
        first(field(&value, "cloud")?, "instance", instance_id)
    }

    pub fn list(&self) -> ApplicationResult<Vec<CloudInstance>> {
        let value = self.api.get("cloud")?;
        field(&value, "cloud")
    }

    pub fn delete(&self, instance_id: &str) -> ApplicationResult<StatusReply> {
        debug!("instance: destroy {}", instance_id);
        let value = self.api.delete_with(
            format!("cloud/{}/destroy", instance_id),
            &DeleteCloudInstanceParams::default(),
        )?;
        status(&value)
    }

    pub fn create_snapshot(&self, instance_id: &str) -> ApplicationResult<Created> {
        let value = self
            .api
            .post_empty(format!("cloud/{}/snapshot/create", instance_id))?;
        created(&value, &["id", "snapshotid"])
    }

    pub fn delete_snapshot(
        &self,
        instance_id: &str,
        snapshot_id: &str,
    ) -> ApplicationResult<StatusReply> {
        let value = self.api.delete(format!(
            "cloud/{}/snapshot/{}/delete",
            instance_id, snapshot_id
        ))?;
        status(&value)
    }

    pub fn enable_backup(&self, instance_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .post_empty(format!("cloud/{}/backups/enable", instance_id))?;
        status(&value)
    }

    pub fn disable_backup(&self, instance_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .post_empty(format!("cloud/{}/backups/disable", instance_id))?;
        status(&value)
    }
}
