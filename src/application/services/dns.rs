//! DNS domains and records

use tracing::debug;

use crate::application::api::{created, field, first, status};
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{
    CreateDnsRecordParams, CreateDomainParams, Created, DnsRecord, Domain, StatusReply,
};

pub struct DnsService {
    api: ApiClient,
}

impl DnsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn create_domain(&self, params: &CreateDomainParams) -> ApplicationResult<StatusReply> {
        debug!("dns: add domain {}", params.domain);
        let value = self.api.post("dns/adddomain", params)?;
        status(&value)
    }

    pub fn read_domain(&self, domain: &str) -> ApplicationResult<Domain> {
        let value = self.api.get(format!("dns/{}", domain))?;
        first(field(&value, "domains")?, "domain", domain)
    }

    pub fn list_domains(&self) -> ApplicationResult<Vec<Domain>> {
        let value = self.api.get("dns")?;
        field(&value, "domains")
    }

    pub fn delete_domain(&self, domain: &str) -> ApplicationResult<StatusReply> {
        debug!("dns: delete domain {}", domain);
        let value = self.api.delete(format!("dns/{}/delete", domain))?;
        status(&value)
    }

    pub fn create_record(
        &self,
        domain: &str,
        params: &CreateDnsRecordParams,
    ) -> ApplicationResult<Created> {
        let value = self.api.post(format!("dns/{}/record/add", domain), params)?;
        created(&value, &["id", "recordid"])
    }

    pub fn list_records(&self, domain: &str) -> ApplicationResult<Vec<DnsRecord>> {
        Ok(self.read_domain(domain)?.records)
    }

    pub fn delete_record(&self, domain: &str, record_id: &str) -> ApplicationResult<StatusReply> {
        let value = self
            .api
            .delete(format!("dns/{}/record/{}/delete", domain, record_id))?;
        status(&value)
    }
}
