use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::Scalar;

/// A load balancer with its embedded frontends, backends, ACLs and routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Loadbalancer {
    pub id: Scalar,
    pub name: Scalar,
    pub ip: Scalar,
    pub algorithm: Scalar,
    #[serde(rename = "type")]
    pub kind: Scalar,
    pub status: Scalar,
    #[serde(deserialize_with = "list_or_null")]
    pub frontends: Vec<Frontend>,
    #[serde(deserialize_with = "list_or_null")]
    pub backends: Vec<Backend>,
    #[serde(deserialize_with = "list_or_null")]
    pub acls: Vec<Acl>,
    #[serde(deserialize_with = "list_or_null")]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Frontend {
    pub id: Scalar,
    pub name: Scalar,
    pub algorithm: Scalar,
    pub certificate_id: Scalar,
    pub port: Scalar,
    pub proto: Scalar,
    pub redirecthttps: Scalar,
    pub cookie: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Backend {
    pub id: Scalar,
    pub ip: Scalar,
    pub cloudid: Scalar,
    pub name: Scalar,
    pub ram: Scalar,
    pub cpu: Scalar,
    pub disk: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Acl {
    pub id: Scalar,
    pub name: Scalar,
    pub acl_condition: Scalar,
    pub value: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Route {
    pub id: Scalar,
    pub acl_id: Scalar,
    pub acl_name: Scalar,
    pub routing_condition: Scalar,
    pub backend_id: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateLoadbalancerParams {
    pub name: String,
    pub dcslug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAclParams {
    pub name: String,
    pub conditiontype: String,
    pub frontend_id: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateFrontendParams {
    pub name: String,
    pub proto: String,
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub certificate_id: String,
    pub algorithm: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub redirecthttps: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cookie: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBackendParams {
    pub frontend_id: String,
    pub cloudid: String,
    pub backend_port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateRouteParams {
    pub frontend_id: String,
    pub acl_id: String,
    pub route_condition: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_groups: String,
}
