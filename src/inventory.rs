use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::BTreeMap;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::api::{Domain, PorkbunClient, PriceAmounts, RegistrarApi};
use crate::config::Config;
use crate::error::ConversionError;

/// What one inventory pass found in the account.
#[derive(Debug, Default)]
pub struct Report {
    pub ip: String,
    pub domains: Vec<Domain>,
    pub conversion_errors: Vec<ConversionError>,
    pub prices: BTreeMap<String, PriceAmounts>,
}

impl Report {
    pub fn log(&self) {
        info!("Connected from {}", self.ip);
        for domain in &self.domains {
            info!(
                "{} ({}) expires {} auto-renew={} lock={}",
                domain.domain, domain.status, domain.expire_date, domain.auto_renew, domain.security_lock
            );
        }
        for (tld, price) in &self.prices {
            info!(
                ".{}: registration {:.2}, renewal {:.2}, transfer {:.2}",
                tld, price.registration, price.renewal, price.transfer
            );
        }
        if !self.conversion_errors.is_empty() {
            warn!("{} records could not be read", self.conversion_errors.len());
        }
    }
}

/// Verifies credentials, then collects the account's domains and selected TLD prices.
pub struct Inventory<A> {
    config: Config,
    api: A,
}

impl Inventory<PorkbunClient> {
    pub fn from_config(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        let api = PorkbunClient::new(
            http,
            config.api_key.clone(),
            config.secret_api_key.clone(),
            config.force_ipv4,
        );
        Ok(Self::new(config, api))
    }
}

impl<A: RegistrarApi> Inventory<A> {
    pub fn new(config: Config, api: A) -> Self {
        Self { config, api }
    }

    pub async fn run(&self, cancel: &CancellationToken) -> Result<Report> {
        let ip = self
            .api
            .ping(cancel)
            .await
            .context("Failed to verify API credentials")?;
        info!("Credentials accepted");

        let batch = self
            .api
            .all_domains(cancel)
            .await
            .context("Failed to list domains")?;
        info!("Found {} domains", batch.items.len());

        let mut report = Report {
            ip,
            domains: batch.items,
            conversion_errors: batch.errors,
            prices: BTreeMap::new(),
        };

        if self.config.pricing_tlds.is_empty() {
            return Ok(report);
        }

        let pricing = self
            .api
            .pricing(cancel)
            .await
            .context("Failed to fetch pricing")?;
        for tld in &self.config.pricing_tlds {
            let tld = tld.trim_start_matches('.');
            match pricing.get(tld).map(|p| p.amounts()) {
                Some(Ok(amounts)) => {
                    report.prices.insert(tld.to_string(), amounts);
                }
                Some(Err(e)) => {
                    warn!("Unreadable price for .{}: {}", tld, e);
                    report.conversion_errors.push(e);
                }
                None => warn!("No pricing published for .{}", tld),
            }
        }

        Ok(report)
    }
}
