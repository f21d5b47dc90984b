//! Resources that can be attached to a Kubernetes cluster or an autoscaling group

use crate::application::ApplicationResult;
use crate::domain::{
    AttachedLoadbalancer, AttachedSecurityGroup, AttachedTargetGroup, Created, StatusReply,
};

/// Attach, inspect and detach load balancers, security groups and target
/// groups on a parent resource. Reads select from the parent's details.
pub trait Attachments {
    fn create_loadbalancer(&self, parent_id: &str, lb_id: &str) -> ApplicationResult<Created>;
    fn read_loadbalancer(&self, parent_id: &str, lb_id: &str)
        -> ApplicationResult<AttachedLoadbalancer>;
    fn list_loadbalancers(&self, parent_id: &str) -> ApplicationResult<Vec<AttachedLoadbalancer>>;
    fn delete_loadbalancer(&self, parent_id: &str, lb_id: &str) -> ApplicationResult<StatusReply>;

    fn create_security_group(&self, parent_id: &str, sg_id: &str) -> ApplicationResult<Created>;
    fn read_security_group(
        &self,
        parent_id: &str,
        sg_id: &str,
    ) -> ApplicationResult<AttachedSecurityGroup>;
    fn list_security_groups(&self, parent_id: &str)
        -> ApplicationResult<Vec<AttachedSecurityGroup>>;
    fn delete_security_group(&self, parent_id: &str, sg_id: &str) -> ApplicationResult<StatusReply>;

    fn create_target_group(&self, parent_id: &str, tg_id: &str) -> ApplicationResult<Created>;
    fn read_target_group(&self, parent_id: &str, tg_id: &str)
        -> ApplicationResult<AttachedTargetGroup>;
    fn list_target_groups(&self, parent_id: &str) -> ApplicationResult<Vec<AttachedTargetGroup>>;
    fn delete_target_group(&self, parent_id: &str, tg_id: &str) -> ApplicationResult<StatusReply>;
}
