use serde::{Deserialize, Serialize};

use crate::domain::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bucket {
    pub name: Scalar,
    pub dcslug: Scalar,
    pub size: Scalar,
    pub status: Scalar,
    pub object_count: Scalar,
    pub current_size: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccessKey {
    pub name: Scalar,
    pub accesskey: Scalar,
    pub dcslug: Scalar,
    pub status: Scalar,
    pub created_at: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBucketParams {
    pub dcslug: String,
    pub name: String,
    pub billing: String,
    pub size: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAccessKeyParams {
    pub accesskey_name: String,
}
