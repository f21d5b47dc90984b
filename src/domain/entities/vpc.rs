use serde::{Deserialize, Serialize};

use crate::domain::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Vpc {
    pub id: Scalar,
    pub network: Scalar,
    pub name: Scalar,
    pub size: Scalar,
    pub dcslug: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateVpcParams {
    pub dcslug: String,
    pub name: String,
    pub planid: String,
    pub network: String,
    pub size: String,
}
