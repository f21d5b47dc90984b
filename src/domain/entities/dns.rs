use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::Scalar;

/// A DNS zone managed by Utho.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub domain: Scalar,
    pub dnsrecord_count: Scalar,
    pub created_at: Scalar,
    #[serde(deserialize_with = "list_or_null")]
    pub records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    pub id: Scalar,
    pub hostname: Scalar,
    #[serde(rename = "type")]
    pub kind: Scalar,
    pub value: Scalar,
    pub ttl: Scalar,
    pub priority: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDomainParams {
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDnsRecordParams {
    #[serde(rename = "type")]
    pub kind: String,
    pub hostname: String,
    pub value: String,
    pub ttl: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub porttype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub priority: String,
    // The API spells this field "wight".
    #[serde(rename = "wight", skip_serializing_if = "String::is_empty")]
    pub weight: String,
}
