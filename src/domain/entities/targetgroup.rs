use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetGroup {
    pub id: Scalar,
    pub name: Scalar,
    pub port: Scalar,
    pub protocol: Scalar,
    pub health_check_path: Scalar,
    pub health_check_protocol: Scalar,
    pub health_check_interval: Scalar,
    pub health_check_timeout: Scalar,
    pub healthy_threshold: Scalar,
    pub unhealthy_threshold: Scalar,
    #[serde(deserialize_with = "list_or_null")]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Target {
    pub id: Scalar,
    pub ip: Scalar,
    pub cloudid: Scalar,
    pub status: Scalar,
    pub backend_port: Scalar,
    pub backend_protocol: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTargetGroupParams {
    pub name: String,
    pub protocol: String,
    pub port: String,
    pub health_check_path: String,
    pub health_check_protocol: String,
    pub health_check_interval: String,
    pub health_check_timeout: String,
    pub healthy_threshold: String,
    pub unhealthy_threshold: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTargetParams {
    pub backend_protocol: String,
    pub backend_port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cloudid: String,
}

/// Body of a target group delete; the API wants the name echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteTargetGroupParams {
    pub name: String,
}
