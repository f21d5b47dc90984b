//! Object storage buckets and access keys, scoped by data center

use tracing::debug;

use crate::application::api::{created, field, find_by, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    AccessKey, Bucket, CreateAccessKeyParams, CreateBucketParams, Created, DomainError,
    StatusReply,
};

pub struct ObjectStorageService {
    api: ApiClient,
}

impl ObjectStorageService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create_bucket(&self, params: &CreateBucketParams) -> ApplicationResult<Created> {
        debug!("objectstorage: create bucket {} in {}", params.name, params.dcslug);
        let value = self.api.post("objectstorage/bucket/create", params)?;
        created(&value, &["id", "bucketid"])
    }

    pub fn read_bucket(&self, dcslug: &str, bucket: &str) -> ApplicationResult<Bucket> {
        find_by(self.list_buckets(dcslug)?, "bucket", bucket, |b| &b.name)
    }

    pub fn list_buckets(&self, dcslug: &str) -> ApplicationResult<Vec<Bucket>> {
        let value = self.api.get(format!("objectstorage/{}/buckets", dcslug))?;
        field(&value, "buckets")
    }

    pub fn delete_bucket(&self, dcslug: &str, bucket: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .delete(format!("objectstorage/{}/bucket/{}/delete", dcslug, bucket))?;
        status(&value)
    }

    pub fn create_access_key(
        &self,
        dcslug: &str,
        params: &CreateAccessKeyParams,
    ) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .post(format!("objectstorage/{}/accesskey/create", dcslug), params)?;
        status(&value)
    }

    /// Look up a key by its access key id or its name.
    pub fn read_access_key(&self, dcslug: &str, accesskey: &str) -> ApplicationResult<AccessKey> {
        self.list_access_keys(dcslug)?
            .into_iter()
            .find(|k| k.accesskey == accesskey || k.name == accesskey)
            .ok_or_else(|| DomainError::not_found("access key", accesskey).into())
    }

    pub fn list_access_keys(&self, dcslug: &str) -> ApplicationResult<Vec<AccessKey>> {
        let value = self.api.get(format!("objectstorage/{}/accesskeys", dcslug))?;
        field(&value, "accesskeys")
    }
}
