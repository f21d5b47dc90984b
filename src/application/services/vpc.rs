//! Virtual private clouds

use crate::application::api::{created, field, first, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{CreateVpcParams, Created, StatusReply, Vpc};

pub struct VpcService {
    api: ApiClient,
}

impl VpcService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create(&self, params: &CreateVpcParams) -> ApplicationResult<Created> {
        let value = self.api.post("vpc/create", params)?;
        created(&value, &["id", "vpcid"])
    }

    pub fn read(&self, vpc_id: &str) -> ApplicationResult<Vpc> {
        let value = self.api.get(format!("vpc/{}", vpc_id))?;
        first(field(&value, "vpc")?, "vpc", vpc_id)
    }

    pub fn list(&self) -> ApplicationResult<Vec<Vpc>> {
        let value = self.api.get("vpc")?;
        field(&value, "vpc")
    }

    pub fn delete(&self, vpc_id: &str) -> ApplicationResult<StatusReply> {
        let value = self.api.delete(format!("vpc/{}/destroy", vpc_id))?;
        status(&value)
    }
}
