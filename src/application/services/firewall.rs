//! Firewalls and their rules

use tracing::debug;

use crate::application::api::{created, field, find_by, first, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    CreateFirewallParams, CreateFirewallRuleParams, Created, Firewall, FirewallRule, StatusReply,
};

pub struct FirewallService {
    api: ApiClient,
}

impl FirewallService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create(&self, params: &CreateFirewallParams) -> ApplicationResult<Created> {
        debug!("firewall: create name={}", params.name);
        let value = self.api.post("firewall/create", params)?;
        created(&value, &["id", "firewallid"])
    }

    pub fn read(&self, firewall_id: &str) -> ApplicationResult<Firewall> {
        let value = self.api.get(format!("firewall/{}", firewall_id))?;
        first(field(&value, "firewalls")?, "firewall", firewall_id)
    }

    pub fn list(&self) -> ApplicationResult<Vec<Firewall>> {
        let value = self.api.get("firewall")?;
        field(&value, "firewalls")
    }

    pub fn delete(&self, firewall_id: &str) -> ApplicationResult<StatusReply> {
        debug!("firewall: destroy {}", firewall_id);
        let value = self.api.delete(format!("firewall/{}/destroy", firewall_id))?;
        status(&value)
    }

    pub fn create_rule(
        &self,
        firewall_id: &str,
        params: &CreateFirewallRuleParams,
    ) -> ApplicationResult<Created> {
        let value = self
            .api
            .post(format!("firewall/{}/rule/add", firewall_id), params)?;
        created(&value, &["id", "ruleid"])
    }

    pub fn read_rule(&self, firewall_id: &str, rule_id: &str) -> ApplicationResult<FirewallRule> {
        find_by(self.list_rules(firewall_id)?, "firewall rule", rule_id, |r| &r.id)
    }

    pub fn list_rules(&self, firewall_id: &str) -> ApplicationResult<Vec<FirewallRule>> {
        Ok(self.read(firewall_id)?.rules)
    }

    pub fn delete_rule(&self, firewall_id: &str, rule_id: &str) -> ApplicationResult<StatusReply> {
        let value = self.api.delete(format!(
            "firewall/{}/rule/{}/delete",
            firewall_id, rule_id
        ))?;
        status(&value)
    }
}
