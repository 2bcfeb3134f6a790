use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::client::{Batch, RegistrarApi};
use super::convert::WireLiteral;
use super::credentials::{Authed, Authenticated, Credentials};
use super::dns_record::{DnsRecord, DnsRecordQuery, WireDnsRecord};
use super::domain::{Domain, WireDomain};
use super::models::*;
use super::status::StatusEnvelope;
use super::url_forward::{UrlForward, WireUrlForward};
use crate::error::{Error, Result};

const API_PATH: &str = "api/json/v3";
const DEFAULT_HOST: &str = "porkbun.com";
const IPV4_HOST: &str = "api-ipv4.porkbun.com";

/// Client for the Porkbun JSON API.
///
/// Holds the key pair and base URL; neither changes after construction, so
/// one client can serve concurrent callers.
pub struct PorkbunClient {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl PorkbunClient {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        secret_api_key: impl Into<String>,
        force_ipv4: bool,
    ) -> Self {
        let host = if force_ipv4 { IPV4_HOST } else { DEFAULT_HOST };
        Self::with_base_url(
            client,
            Credentials::new(api_key, secret_api_key),
            format!("https://{}/{}", host, API_PATH),
        )
    }

    /// Points the client at another API root, e.g. a local mock server.
    pub fn with_base_url(
        client: reqwest::Client,
        credentials: Credentials,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the raw response body.
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| Error::transport("failed to send request", e))?;
            debug!("{} responded with HTTP {}", path, response.status());
            response
                .text()
                .await
                .map_err(|e| Error::transport("failed to read response body", e))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = exchange => result,
        }
    }

    async fn get<T: DeserializeOwned>(&self, cancel: &CancellationToken, path: &str) -> Result<T> {
        let raw = self.execute(cancel, Method::GET, path, None).await?;
        decode_response(&raw)
    }

    /// Stamps the key pair onto `body`, then sends it as JSON.
    async fn post<B, T>(&self, cancel: &CancellationToken, path: &str, mut body: B) -> Result<T>
    where
        B: Authenticated + Serialize + Send,
        T: DeserializeOwned,
    {
        self.credentials.stamp(&mut body);
        let encoded = serde_json::to_vec(&body)
            .map_err(|e| Error::transport("failed to marshal request", e))?;
        let raw = self.execute(cancel, Method::POST, path, Some(encoded)).await?;
        decode_response(&raw)
    }

    /// POSTs a bare key pair and only checks the status.
    async fn post_empty(&self, cancel: &CancellationToken, path: &str) -> Result<()> {
        self.post::<_, IgnoredAny>(cancel, path, Credentials::default())
            .await
            .map(|_| ())
    }
}

/// Decodes only the status envelope and turns a non-success status into an error.
pub fn decode_envelope(raw: &str) -> Result<StatusEnvelope> {
    serde_json::from_str::<StatusEnvelope>(raw)
        .map_err(|e| Error::transport("failed to unmarshal response", e))?
        .check()
}

/// Checks the envelope, then decodes the endpoint payload from the same body.
fn decode_response<T: DeserializeOwned>(raw: &str) -> Result<T> {
    decode_envelope(raw)?;
    serde_json::from_str(raw).map_err(|e| Error::transport("failed to unmarshal response", e))
}

#[derive(Debug, Deserialize)]
struct DomainsResponse {
    #[serde(default)]
    domains: Vec<WireDomain>,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<WireDnsRecord>,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    #[serde(default)]
    id: WireLiteral,
}

#[derive(Debug, Deserialize)]
struct ForwardsResponse {
    #[serde(default)]
    forwards: Vec<WireUrlForward>,
}

#[derive(Debug, Deserialize)]
struct PricingResponse {
    #[serde(default)]
    pricing: BTreeMap<String, Pricing>,
}

#[async_trait]
impl RegistrarApi for PorkbunClient {
    async fn ping(&self, cancel: &CancellationToken) -> Result<String> {
        let res: PingResponse = self.post(cancel, "ping", Credentials::default()).await?;
        Ok(res.your_ip)
    }

    async fn name_servers(&self, cancel: &CancellationToken, domain: &str) -> Result<Vec<String>> {
        let path = format!("domain/getNs/{}", domain);
        let res: NameServersResponse = self.post(cancel, &path, Credentials::default()).await?;
        Ok(res.ns)
    }

    async fn update_name_servers(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        name_servers: &[String],
    ) -> Result<()> {
        let path = format!("domain/updateNs/{}", domain);
        let req = Authed::new(NameServersRequest { ns: name_servers });
        self.post::<_, IgnoredAny>(cancel, &path, req).await?;
        Ok(())
    }

    async fn domain_list(&self, cancel: &CancellationToken, start: u64) -> Result<Batch<Domain>> {
        let req = Authed::new(StartRequest { start });
        let res: DomainsResponse = self.post(cancel, "domain/listAll", req).await?;
        Ok(Batch::convert(&res.domains))
    }

    async fn dns_records(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        query: &DnsRecordQuery,
    ) -> Result<Batch<DnsRecord>> {
        let path = query.path(domain);
        let res: RecordsResponse = self.post(cancel, &path, Credentials::default()).await?;
        Ok(Batch::convert(&res.records))
    }

    async fn create_dns_record(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record: &DnsRecord,
    ) -> Result<i64> {
        let path = format!("dns/create/{}", domain);
        let req = Authed::new(WireDnsRecord::from(record));
        let res: CreatedResponse = self.post(cancel, &path, req).await?;
        Ok(res.id.required("id")?)
    }

    async fn edit_dns_record(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        id: i64,
        record: &DnsRecord,
    ) -> Result<()> {
        let path = format!("dns/edit/{}/{}", domain, id);
        let req = Authed::new(WireDnsRecord::from(record));
        self.post::<_, IgnoredAny>(cancel, &path, req).await?;
        Ok(())
    }

    async fn delete_dns_record(&self, cancel: &CancellationToken, domain: &str, id: i64) -> Result<()> {
        self.post_empty(cancel, &format!("dns/delete/{}/{}", domain, id))
            .await
    }

    async fn url_forwards(&self, cancel: &CancellationToken, domain: &str) -> Result<Batch<UrlForward>> {
        let path = format!("domain/getUrlForwarding/{}", domain);
        let res: ForwardsResponse = self.post(cancel, &path, Credentials::default()).await?;
        Ok(Batch::convert(&res.forwards))
    }

    async fn add_url_forward(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        forward: &UrlForward,
    ) -> Result<()> {
        let path = format!("domain/addUrlForward/{}", domain);
        let req = Authed::new(WireUrlForward::from(forward));
        self.post::<_, IgnoredAny>(cancel, &path, req).await?;
        Ok(())
    }

    async fn delete_url_forward(&self, cancel: &CancellationToken, domain: &str, id: i64) -> Result<()> {
        // Endpoint name follows the upstream API docs verbatim.
        self.post_empty(cancel, &format!("domain/deleteUrlForward/{}/{}", domain, id))
            .await
    }

    async fn ssl_bundle(&self, cancel: &CancellationToken, domain: &str) -> Result<SslBundle> {
        let path = format!("ssl/retrieve/{}", domain);
        self.post(cancel, &path, Credentials::default()).await
    }

    async fn pricing(&self, cancel: &CancellationToken) -> Result<BTreeMap<String, Pricing>> {
        let res: PricingResponse = self.get(cancel, "pricing/get").await?;
        Ok(res.pricing)
    }
}
