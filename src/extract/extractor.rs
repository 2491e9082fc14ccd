//! Page-walking extractor

use crate::config::HarvestConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RateLimitGuard};
use crate::pagination;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Fetches all pages of JSON records for one endpoint
#[derive(Debug, Clone)]
pub struct Extractor {
    config: HarvestConfig,
    client: HttpClient,
    guard: RateLimitGuard,
}

impl Extractor {
    /// Create an extractor for the configured repository.
    pub fn new(config: HarvestConfig) -> Result<Self> {
        let client = HttpClient::for_github(&config)?;
        let guard = RateLimitGuard::new(client.clone());
        Ok(Self {
            config,
            client,
            guard,
        })
    }

    /// The rate-limit guard backing this extractor.
    pub fn guard(&self) -> &RateLimitGuard {
        &self.guard
    }

    /// Fetch every page of records for `endpoint`, in page order.
    ///
    /// Returns [`Error::QuotaExhausted`] without issuing the data
    /// request when the remaining quota is zero. Any mid-sequence page
    /// failure aborts the whole fetch; partial pages are never returned.
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<Vec<Value>> {
        let status = self.guard.check().await?;
        if status.is_exhausted() {
            return Err(Error::QuotaExhausted {
                used: status.used,
                limit: status.limit,
            });
        }

        info!("Extracting {} from {}...", endpoint, self.config.owner_repo);
        let started = Instant::now();

        let mut url = self.initial_url(endpoint);
        let mut records = Vec::new();
        let mut pages = 0u32;

        loop {
            let response = self.client.get(&url).await?;
            // Read the next link before the body consumes the response.
            let next = pagination::next_link(response.headers());

            let body: Value = response.json().await.map_err(Error::Transport)?;
            let page = match body {
                Value::Array(items) => items,
                other => {
                    return Err(Error::UnexpectedShape {
                        endpoint: endpoint.to_string(),
                        found: json_kind(&other).to_string(),
                    })
                }
            };

            pages += 1;
            debug!(page = pages, records = page.len(), "fetched page");
            records.extend(page);

            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        info!(
            "Fetched {} {} records across {} pages in {:.1?}",
            records.len(),
            endpoint,
            pages,
            started.elapsed()
        );

        // Post-fetch usage report; the fetch itself is already complete.
        self.guard.check().await?;

        Ok(records)
    }

    /// Initial request URL: `{base}/repos/{owner_repo}/{endpoint}` with
    /// the page-size cap, plus `state=all` where closed items matter.
    fn initial_url(&self, endpoint: Endpoint) -> String {
        let mut url = format!(
            "{}/repos/{}/{}?per_page={}",
            self.config.api_base.trim_end_matches('/'),
            self.config.owner_repo,
            endpoint,
            self.config.page_size
        );
        if endpoint.includes_all_states() {
            url.push_str("&state=all");
        }
        url
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
