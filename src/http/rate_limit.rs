//! Rate-limit guard
//!
//! Reads the remaining request quota for the "core" resource category
//! from the API's `/rate_limit` endpoint. The status query itself does
//! not count against the quota, so the guard is a pure read-through:
//! it never consumes or reserves requests.

use super::client::HttpClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

/// Snapshot of the core-API request quota
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimitStatus {
    /// Total requests allowed in the current window
    pub limit: u64,
    /// Requests still available
    pub remaining: u64,
    /// Requests already consumed
    #[serde(default)]
    pub used: u64,
    /// Unix timestamp at which the window resets
    pub reset: i64,
}

impl RateLimitStatus {
    /// Whether the quota is used up. Callers must not issue data
    /// requests while this is true.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// The instant the quota window resets, if the timestamp is valid.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }
}

/// Response envelope of `GET /rate_limit`
#[derive(Debug, Deserialize)]
struct RateLimitEnvelope {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: RateLimitStatus,
}

/// Queries the remaining request quota before a fetch sequence
#[derive(Debug, Clone)]
pub struct RateLimitGuard {
    client: HttpClient,
}

impl RateLimitGuard {
    /// Create a guard sharing the given client's connection pool.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Query current quota usage and report it.
    pub async fn check(&self) -> Result<RateLimitStatus> {
        let envelope: RateLimitEnvelope = self.client.get_json("/rate_limit").await?;
        let status = envelope.resources.core;

        match status.reset_at() {
            Some(reset) => info!(
                "API request usage: {}/{} (window resets {})",
                status.used, status.limit, reset
            ),
            None => info!("API request usage: {}/{}", status.used, status.limit),
        }

        Ok(status)
    }
}
