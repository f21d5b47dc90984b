use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::{AttachedLoadbalancer, AttachedSecurityGroup, AttachedTargetGroup, Scalar};

/// Confirmation phrase the API requires before destroying a cluster.
pub const DESTROY_CLUSTER_CONFIRMATION: &str =
    "I am aware this action will delete data and cluster permanently";

/// Summary of a Kubernetes cluster as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KubernetesCluster {
    pub id: Scalar,
    pub dcslug: Scalar,
    pub hostname: Scalar,
    pub ram: Scalar,
    pub cpu: Scalar,
    pub disksize: Scalar,
    pub ip: Scalar,
    pub status: Scalar,
    pub worker_count: Scalar,
}

/// Full cluster read: metadata plus attached resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KubernetesDetails {
    pub info: KubernetesInfo,
    #[serde(deserialize_with = "list_or_null")]
    pub load_balancers: Vec<AttachedLoadbalancer>,
    #[serde(deserialize_with = "list_or_null")]
    pub security_group: Vec<AttachedSecurityGroup>,
    #[serde(deserialize_with = "list_or_null")]
    pub target_groups: Vec<AttachedTargetGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KubernetesInfo {
    pub cluster: KubernetesCluster,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodepoolParams {
    pub label: String,
    pub size: String,
    pub count: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateKubernetesParams {
    pub dcslug: String,
    pub cluster_label: String,
    pub cluster_version: String,
    pub nodepools: Vec<NodepoolParams>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vpc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub security_groups: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteKubernetesParams {
    pub cluster_id: String,
    pub confirm: String,
}

impl DeleteKubernetesParams {
    pub fn new(cluster_id: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            confirm: DESTROY_CLUSTER_CONFIRMATION.to_string(),
        }
    }
}
