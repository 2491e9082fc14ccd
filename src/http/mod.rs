//! HTTP layer
//!
//! A thin GET-only client over `reqwest` plus the rate-limit guard that
//! reads the remaining request quota from the API before a fetch
//! sequence starts. There are no retries and no backoff anywhere in this
//! layer; a failed request is terminal for the run.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimitGuard, RateLimitStatus};
