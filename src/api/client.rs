use std::collections::BTreeMap;

use async_trait::async_trait;
use log::warn;
use tokio_util::sync::CancellationToken;

use super::dns_record::{DnsRecord, DnsRecordQuery};
use super::domain::Domain;
use super::models::{Pricing, SslBundle};
use super::url_forward::UrlForward;
use crate::error::{ConversionError, Result};

/// Maximum number of domains `domain/listAll` returns per call.
pub const DOMAIN_PAGE_SIZE: usize = 1000;

/// Records converted from one listing call, plus the ones that failed to convert.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub items: Vec<T>,
    pub errors: Vec<ConversionError>,
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> Batch<T> {
    /// Converts every wire record, collecting failures instead of stopping at the first.
    pub(crate) fn convert<W>(wire: &[W]) -> Self
    where
        for<'a> T: TryFrom<&'a W, Error = ConversionError>,
    {
        let mut batch = Self::default();
        for record in wire {
            match T::try_from(record) {
                Ok(item) => batch.items.push(item),
                Err(e) => {
                    warn!("Skipping record: {}", e);
                    batch.errors.push(e);
                }
            }
        }
        batch
    }

    /// Number of records the server returned, converted or not.
    pub fn len(&self) -> usize {
        self.items.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extend(&mut self, other: Batch<T>) {
        self.items.extend(other.items);
        self.errors.extend(other.errors);
    }
}

/// Operations exposed by the registrar API.
///
/// Every call issues a single request and observes `cancel` while it is in
/// flight. Nothing is retried.
#[async_trait]
pub trait RegistrarApi: Send + Sync {
    /// Checks the credentials and returns the caller's public IP.
    async fn ping(&self, cancel: &CancellationToken) -> Result<String>;

    async fn name_servers(&self, cancel: &CancellationToken, domain: &str) -> Result<Vec<String>>;

    async fn update_name_servers(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        name_servers: &[String],
    ) -> Result<()>;

    /// One page of the account's domains, starting at offset `start`.
    async fn domain_list(&self, cancel: &CancellationToken, start: u64) -> Result<Batch<Domain>>;

    /// Every domain in the account.
    ///
    /// Pages through `domain_list` in steps of [`DOMAIN_PAGE_SIZE`] and stops
    /// after the first page shorter than that.
    async fn all_domains(&self, cancel: &CancellationToken) -> Result<Batch<Domain>> {
        let mut all = Batch::default();
        let mut start = 0;
        loop {
            let page = self.domain_list(cancel, start).await?;
            let fetched = page.len();
            all.extend(page);
            if fetched < DOMAIN_PAGE_SIZE {
                return Ok(all);
            }
            start += DOMAIN_PAGE_SIZE as u64;
        }
    }

    async fn dns_records(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        query: &DnsRecordQuery,
    ) -> Result<Batch<DnsRecord>>;

    /// Creates a record and returns the id the registrar assigned to it.
    async fn create_dns_record(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record: &DnsRecord,
    ) -> Result<i64>;

    async fn edit_dns_record(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        id: i64,
        record: &DnsRecord,
    ) -> Result<()>;

    async fn delete_dns_record(&self, cancel: &CancellationToken, domain: &str, id: i64) -> Result<()>;

    async fn url_forwards(&self, cancel: &CancellationToken, domain: &str) -> Result<Batch<UrlForward>>;

    async fn add_url_forward(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        forward: &UrlForward,
    ) -> Result<()>;

    async fn delete_url_forward(&self, cancel: &CancellationToken, domain: &str, id: i64) -> Result<()>;

    async fn ssl_bundle(&self, cancel: &CancellationToken, domain: &str) -> Result<SslBundle>;

    /// Default pricing for every supported TLD. The only unauthenticated call.
    async fn pricing(&self, cancel: &CancellationToken) -> Result<BTreeMap<String, Pricing>>;
}
