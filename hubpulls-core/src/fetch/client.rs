//! HTTP client for the registry listing endpoint

use std::future::Future;

use crate::config::RegistryConfig;
use crate::error::{Error, Result};

use super::{parse_page, PageOutcome, PageSource};

/// Listing client backed by `reqwest`.
///
/// No timeout, retry or authentication is configured.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for the configured base URL
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("hubpulls/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// The listing URL pages are requested from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_page(&self, page: u32, page_size: u32) -> Result<PageOutcome> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("page_size", page_size), ("page", page)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Ok(PageOutcome::BadStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

impl PageSource for RegistryClient {
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<PageOutcome>> + Send {
        self.get_page(page, page_size)
    }
}
