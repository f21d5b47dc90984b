//! Resources attached to a Kubernetes cluster or an autoscaling group.

use serde::Deserialize;

use crate::domain::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachedLoadbalancer {
    pub id: Scalar,
    pub name: Scalar,
    pub ip: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachedSecurityGroup {
    pub id: Scalar,
    pub name: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachedTargetGroup {
    pub id: Scalar,
    pub name: Scalar,
    pub protocol: Scalar,
    pub port: Scalar,
}
