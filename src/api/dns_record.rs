use serde::{Deserialize, Serialize};

use super::convert::{string_or_null, WireLiteral};
use crate::error::ConversionError;

/// A DNS record on a domain managed by the registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub id: Option<i64>,
    pub subdomain: String,
    pub record_type: String,
    pub content: String,
    pub ttl: i64,
    pub priority: Option<i64>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WireDnsRecord {
    #[serde(default, skip_serializing_if = "WireLiteral::is_empty")]
    pub id: WireLiteral,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "string_or_null")]
    pub record_type: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub content: String,
    #[serde(default)]
    pub ttl: WireLiteral,
    #[serde(default)]
    pub prio: WireLiteral,
    #[serde(default, deserialize_with = "string_or_null")]
    pub notes: String,
}

impl From<&DnsRecord> for WireDnsRecord {
    fn from(record: &DnsRecord) -> Self {
        WireDnsRecord {
            id: WireLiteral::optional_from(record.id),
            name: record.subdomain.clone(),
            record_type: record.record_type.clone(),
            content: record.content.clone(),
            ttl: WireLiteral::from(record.ttl),
            prio: WireLiteral::optional_from(record.priority),
            notes: record.notes.clone(),
        }
    }
}

impl TryFrom<&WireDnsRecord> for DnsRecord {
    type Error = ConversionError;

    fn try_from(wire: &WireDnsRecord) -> Result<Self, Self::Error> {
        Ok(DnsRecord {
            id: wire.id.optional("id")?,
            subdomain: wire.name.clone(),
            record_type: wire.record_type.clone(),
            content: wire.content.clone(),
            ttl: wire.ttl.required("ttl")?,
            priority: wire.prio.optional("priority")?,
            notes: wire.notes.clone(),
        })
    }
}

/// Which records `dns_records` retrieves. The variants map to distinct endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecordQuery {
    /// Every record on the domain.
    All,
    /// A single record by its numeric id.
    Id(i64),
    /// Records of one type, optionally narrowed to a subdomain.
    NameType {
        record_type: String,
        subdomain: Option<String>,
    },
}

impl DnsRecordQuery {
    pub(crate) fn path(&self, domain: &str) -> String {
        match self {
            DnsRecordQuery::All => format!("dns/retrieve/{}", domain),
            DnsRecordQuery::Id(id) => format!("dns/retrieve/{}/{}", domain, id),
            DnsRecordQuery::NameType {
                record_type,
                subdomain,
            } => match subdomain.as_deref() {
                Some(sub) if !sub.is_empty() => {
                    format!("dns/retrieveByNameType/{}/{}/{}", domain, record_type, sub)
                }
                _ => format!("dns/retrieveByNameType/{}/{}", domain, record_type),
            },
        }
    }
}
