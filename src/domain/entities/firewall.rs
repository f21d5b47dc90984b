use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Firewall {
    pub id: Scalar,
    pub name: Scalar,
    pub created_at: Scalar,
    pub rulecount: Scalar,
    pub serverscount: Scalar,
    #[serde(deserialize_with = "list_or_null")]
    pub rules: Vec<FirewallRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    pub id: Scalar,
    pub firewallid: Scalar,
    #[serde(rename = "type")]
    pub kind: Scalar,
    pub service: Scalar,
    pub protocol: Scalar,
    pub port: Scalar,
    pub addresses: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateFirewallParams {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateFirewallRuleParams {
    #[serde(rename = "type")]
    pub kind: String,
    pub service: String,
    pub protocol: String,
    pub port: String,
    pub addresses: String,
}
