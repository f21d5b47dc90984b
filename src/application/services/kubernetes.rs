//! Kubernetes clusters and the load balancers, security groups and
//! target groups attached to them

use tracing::debug;

use crate::application::api::{created, decode, field, find_by, status};
use crate::application::services::Attachments;
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    AttachedLoadbalancer, AttachedSecurityGroup, AttachedTargetGroup, CreateKubernetesParams,
    Created, DeleteKubernetesParams, KubernetesCluster, KubernetesDetails, StatusReply,
};

pub struct KubernetesService {
    api: ApiClient,
}

impl KubernetesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create(&self, params: &CreateKubernetesParams) -> ApplicationResult<Created> {
        debug!("kubernetes: create label={}", params.cluster_label);
        let value = self.api.post("kubernetes/deploy", params)?;
        created(&value, &["id", "cluster_id", "clusterid"])
    }

    /// Read a cluster with everything attached to it.
    pub fn details(&self, cluster_id: &str) -> ApplicationResult<KubernetesDetails> {
        let value = self.api.get(format!("kubernetes/{}", cluster_id))?;
        decode(value, "kubernetes cluster")
    }

    pub fn read(&self, cluster_id: &str) -> ApplicationResult<KubernetesCluster> {
        Ok(self.details(cluster_id)?.info.cluster)
    }

    pub fn list(&self) -> ApplicationResult<Vec<KubernetesCluster>> {
        let value = self.api.get("kubernetes")?;
        field(&value, "k8s")
    }

    pub fn delete(&self, cluster_id: &str) -> ApplicationResult<StatusReply> {
        debug!("kubernetes: destroy {}", cluster_id);
        let value = self
            .api
            .post("kubernetes/destroy", &DeleteKubernetesParams::new(cluster_id))?;
        status(&value)
    }

    fn attach(&self, cluster_id: &str, kind: &str, child_id: &str) -> ApplicationResult<Created> {
        let value = self
            .api
            .post_empty(format!("kubernetes/{}/{}/{}", cluster_id, kind, child_id))?;
        created(&value, &["id"])
    }

    fn detach(&self, cluster_id: &str, kind: &str, child_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .delete(format!("kubernetes/{}/{}/{}", cluster_id, kind, child_id))?;
        status(&value)
    }
}

impl Attachments for KubernetesService {
    fn create_loadbalancer(&self, cluster_id: &str, lb_id: &str) -> ApplicationResult<Created> {
        self.attach(cluster_id, "loadbalancer", lb_id)
    }

    fn read_loadbalancer(
        &self,
        cluster_id: &str,
        lb_id: &str,
    ) -> ApplicationResult<AttachedLoadbalancer> {
        find_by(self.list_loadbalancers(cluster_id)?, "loadbalancer", lb_id, |l| &l.id)
    }

    fn list_loadbalancers(&self, cluster_id: &str) -> ApplicationResult<Vec<AttachedLoadbalancer>> {
        Ok(self.details(cluster_id)?.load_balancers)
    }

    fn delete_loadbalancer(&self, cluster_id: &str, lb_id: &str) -> ApplicationResult<StatusReply> {
        self.detach(cluster_id, "loadbalancer", lb_id)
    }

    fn create_security_group(&self, cluster_id: &str, sg_id: &str) -> ApplicationResult<Created> {
        self.attach(cluster_id, "securitygroup", sg_id)
    }

    fn read_security_group(
        &self,
        cluster_id: &str,
        sg_id: &str,
    ) -> ApplicationResult<AttachedSecurityGroup> {
        find_by(self.list_security_groups(cluster_id)?, "security group", sg_id, |s| &s.id)
    }

    fn list_security_groups(
        &self,
        cluster_id: &str,
    ) -> ApplicationResult<Vec<AttachedSecurityGroup>> {
        Ok(self.details(cluster_id)?.security_group)
    }

    fn delete_security_group(&self, cluster_id: &str, sg_id: &str) -> ApplicationResult<StatusReply> {
        self.detach(cluster_id, "securitygroup", sg_id)
    }

    fn create_target_group(&self, cluster_id: &str, tg_id: &str) -> ApplicationResult<Created> {
        self.attach(cluster_id, "targetgroup", tg_id)
    }

    fn read_target_group(
        &self,
        cluster_id: &str,
        tg_id: &str,
    ) -> ApplicationResult<AttachedTargetGroup> {
        find_by(self.list_target_groups(cluster_id)?, "target group", tg_id, |t| &t.id)
    }

    fn list_target_groups(&self, cluster_id: &str) -> ApplicationResult<Vec<AttachedTargetGroup>> {
        Ok(self.details(cluster_id)?.target_groups)
    }

    fn delete_target_group(&self, cluster_id: &str, tg_id: &str) -> ApplicationResult<StatusReply> {
        self.detach(cluster_id, "targetgroup", tg_id)
    }
}
