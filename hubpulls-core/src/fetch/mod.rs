//! Paginated fetching of the registry listing
//!
//! The page loop is written against [`PageSource`] so it can run over the
//! real HTTP client or an in-memory source.
//!
//! ## Stop conditions
//!
//! - the page reports no `next` page: normal end
//! - non-success HTTP status: logged, records so far are returned
//! - body without a `results` array: logged, records so far are returned
//!
//! Transport failures and bodies that are not JSON propagate as errors.
//! Nothing is retried.

mod client;

pub use client::RegistryClient;

use std::future::Future;

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::types::RepositoryRecord;

/// What one listing request produced.
#[derive(Debug)]
pub enum PageOutcome {
    /// A well-formed page
    Page {
        results: Vec<RepositoryRecord>,
        has_next: bool,
    },
    /// The server answered with a non-success status
    BadStatus(u16),
    /// The body parsed but had no `results` array
    MissingResults,
}

/// A source of listing pages.
pub trait PageSource {
    /// Fetch one page. `page` is 1-based.
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<PageOutcome>> + Send;
}

/// Parse a listing response body into a [`PageOutcome`].
///
/// Records that lack `name`, `namespace` or an unsigned `pull_count` fail
/// the whole page.
pub fn parse_page(body: &str) -> Result<PageOutcome> {
    let mut data: serde_json::Value = serde_json::from_str(body)?;

    let has_next = data.get("next").map(is_truthy).unwrap_or(false);

    let results = match data.get_mut("results").map(serde_json::Value::take) {
        Some(results @ serde_json::Value::Array(_)) => results,
        _ => return Ok(PageOutcome::MissingResults),
    };

    let results: Vec<RepositoryRecord> = serde_json::from_value(results)?;

    Ok(PageOutcome::Page { results, has_next })
}

/// JSON truthiness, as used for the listing's `next` field.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}

/// Walk pages from 1 until a stop condition, accumulating records.
pub async fn fetch_all<S: PageSource>(source: &S, page_size: u32) -> Result<Vec<RepositoryRecord>> {
    let mut repositories = Vec::new();
    let mut page: u32 = 1;

    loop {
        match source.fetch_page(page, page_size).await? {
            PageOutcome::Page { results, has_next } => {
                tracing::debug!(page, count = results.len(), has_next, "Fetched listing page");
                repositories.extend(results);

                if !has_next {
                    break;
                }
                page += 1;
            }
            PageOutcome::BadStatus(status) => {
                tracing::warn!(
                    page,
                    status,
                    kept = repositories.len(),
                    "Listing returned non-success status, stopping fetch"
                );
                break;
            }
            PageOutcome::MissingResults => {
                tracing::warn!(
                    page,
                    kept = repositories.len(),
                    "Listing response has no 'results' array, stopping fetch"
                );
                break;
            }
        }
    }

    tracing::info!(total = repositories.len(), pages = page, "Fetch finished");

    Ok(repositories)
}

/// Blocking wrapper around [`fetch_all`]
///
/// Drives the source on a current-thread runtime so callers stay synchronous.
pub struct SyncFetcher<S = RegistryClient> {
    source: S,
    page_size: u32,
    runtime: tokio::runtime::Runtime,
}

impl SyncFetcher<RegistryClient> {
    /// Create a fetcher for the configured registry endpoint
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let client = RegistryClient::new(config)?;
        Self::with_source(client, config.page_size)
    }
}

impl<S: PageSource> SyncFetcher<S> {
    /// Create a fetcher over any page source
    pub fn with_source(source: S, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::Config("page size must be at least 1".to_string()));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(format!("failed to build tokio runtime: {e}")))?;

        Ok(Self {
            source,
            page_size,
            runtime,
        })
    }

    /// Fetch every page (blocking)
    pub fn fetch_all(&self) -> Result<Vec<RepositoryRecord>> {
        self.runtime
            .block_on(fetch_all(&self.source, self.page_size))
    }

    /// The underlying page source
    pub fn source(&self) -> &S {
        &self.source
    }
}
