//! Autoscaling groups with their policies, schedules and attachments

use tracing::debug;

use crate::application::api::{created, field, find_by, first, status};
use crate::application::services::Attachments;
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    AttachedLoadbalancer, AttachedSecurityGroup, AttachedTargetGroup, AutoScalingGroup,
    CreateAutoScalingParams, CreatePolicyParams, CreateScheduleParams, Created,
    DeleteAutoScalingParams, Policy, Schedule, StatusReply,
};

pub struct AutoScalingService {
    api: ApiClient,
}

impl AutoScalingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create(&self, params: &CreateAutoScalingParams) -> ApplicationResult<Created> {
        debug!("autoscaling: create name={}", params.name);
        let value = self.api.post("autoscaling", params)?;
        created(&value, &["id", "groupid"])
    }

    pub fn read(&self, group_id: &str) -> ApplicationResult<AutoScalingGroup> {
        let value = self.api.get(format!("autoscaling/{}", group_id))?;
        first(field(&value, "groups")?, "autoscaling group", group_id)
    }

    pub fn list(&self) -> ApplicationResult<Vec<AutoScalingGroup>> {
        let value = self.api.get("autoscaling")?;
        field(&value, "groups")
    }

    pub fn delete(&self, group_id: &str, name: &str) -> ApplicationResult<StatusReply> {
        debug!("autoscaling: delete {} ({})", group_id, name);
        let params = DeleteAutoScalingParams {
            name: name.to_string(),
        };
        let value = self
            .api
            .delete_with(format!("autoscaling/{}", group_id), &params)?;
        status(&value)
    }

    pub fn create_policy(&self, params: &CreatePolicyParams) -> ApplicationResult<Created> {
        let value = self.api.post("autoscaling/policy", params)?;
        created(&value, &["id", "policyid"])
    }

    pub fn read_policy(&self, group_id: &str, policy_id: &str) -> ApplicationResult<Policy> {
        find_by(self.list_policies(group_id)?, "policy", policy_id, |p| &p.id)
    }

    pub fn list_policies(&self, group_id: &str) -> ApplicationResult<Vec<Policy>> {
        Ok(self.read(group_id)?.policies)
    }

    /// Policies are addressed by their own id, not through the group.
    pub fn delete_policy(&self, policy_id: &str) -> ApplicationResult<StatusReply> {
        let value = self.api.delete(format!("autoscaling/policy/{}", policy_id))?;
        status(&value)
    }

    pub fn create_schedule(
        &self,
        group_id: &str,
        params: &CreateScheduleParams,
    ) -> ApplicationResult<Created> {
        let value = self
            .api
            .post(format!("autoscaling/{}/schedulepolicy", group_id), params)?;
        created(&value, &["id", "scheduleid"])
    }

    pub fn read_schedule(&self, group_id: &str, schedule_id: &str) -> ApplicationResult<Schedule> {
        find_by(self.list_schedules(group_id)?, "schedule", schedule_id, |s| &s.id)
    }

    pub fn list_schedules(&self, group_id: &str) -> ApplicationResult<Vec<Schedule>> {
        Ok(self.read(group_id)?.schedules)
    }

    pub fn delete_schedule(&self, group_id: &str, schedule_id: &str) -> ApplicationResult<StatusReply> {
        let value = self.api.delete(format!(
            "autoscaling/{}/schedulepolicy/{}",
            group_id, schedule_id
        ))?;
        status(&value)
    }

    fn attach(&self, group_id: &str, kind: &str, child_id: &str) -> ApplicationResult<Created> {
        let value = self
            .api
            .post_empty(format!("autoscaling/{}/{}/{}", group_id, kind, child_id))?;
        created(&value, &["id"])
    }

    fn detach(&self, group_id: &str, kind: &str, child_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .delete(format!("autoscaling/{}/{}/{}", group_id, kind, child_id))?;
        status(&value)
    }
}

impl Attachments for AutoScalingService {
    fn create_loadbalancer(&self, group_id: &str, lb_id: &str) -> ApplicationResult<Created> {
        self.attach(group_id, "loadbalancer", lb_id)
    }

    fn read_loadbalancer(
        &self,
        group_id: &str,
        lb_id: &str,
    ) -> ApplicationResult<AttachedLoadbalancer> {
        find_by(self.list_loadbalancers(group_id)?, "loadbalancer", lb_id, |l| &l.id)
    }

    fn list_loadbalancers(&self, group_id: &str) -> ApplicationResult<Vec<AttachedLoadbalancer>> {
        Ok(self.read(group_id)?.load_balancers)
    }

    fn delete_loadbalancer(&self, group_id: &str, lb_id: &str) -> ApplicationResult<StatusReply> {
        self.detach(group_id, "loadbalancer", lb_id)
    }

    fn create_security_group(&self, group_id: &str, sg_id: &str) -> ApplicationResult<Created> {
        self.attach(group_id, "securitygroup", sg_id)
    }

    fn read_security_group(
        &self,
        group_id: &str,
        sg_id: &str,
    ) -> ApplicationResult<AttachedSecurityGroup> {
        find_by(self.list_security_groups(group_id)?, "security group", sg_id, |s| &s.id)
    }

    fn list_security_groups(
        &self,
        group_id: &str,
    ) -> ApplicationResult<Vec<AttachedSecurityGroup>> {
        Ok(self.read(group_id)?.security_groups)
    }

    fn delete_security_group(&self, group_id: &str, sg_id: &str) -> ApplicationResult<StatusReply> {
        self.detach(group_id, "securitygroup", sg_id)
    }

    fn create_target_group(&self, group_id: &str, tg_id: &str) -> ApplicationResult<Created> {
        self.attach(group_id, "targetgroup", tg_id)
    }

    fn read_target_group(
        &self,
        group_id: &str,
        tg_id: &str,
    ) -> ApplicationResult<AttachedTargetGroup> {
        find_by(self.list_target_groups(group_id)?, "target group", tg_id, |t| &t.id)
    }

    fn list_target_groups(&self, group_id: &str) -> ApplicationResult<Vec<AttachedTargetGroup>> {
        Ok(self.read(group_id)?.target_groups)
    }

    fn delete_target_group(&self, group_id: &str, tg_id: &str) -> ApplicationResult<StatusReply> {
        self.detach(group_id, "targetgroup", tg_id)
    }
}
