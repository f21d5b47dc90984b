use serde::Deserialize;

use crate::domain::Scalar;

/// The authenticated account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Scalar,
    pub email: Scalar,
    pub fullname: Scalar,
    pub cloudlimit: Scalar,
    pub k8s_limit: Scalar,
    pub total_cloudservers: Scalar,
    pub currency: Scalar,
    pub availablecredit: Scalar,
}

/// An entry of the account's activity log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Action {
    pub id: Scalar,
    pub action: Scalar,
    pub resource_type: Scalar,
    pub resource_id: Scalar,
    pub started_at: Scalar,
    pub completed_at: Scalar,
    pub process: Scalar,
}
