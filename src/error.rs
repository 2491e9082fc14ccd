//! Error types for gh-harvest
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Quota exhaustion, transport failures, mapping failures, and store
//! failures are distinct variants so callers can react differently to
//! each; none of them is retried anywhere in this crate.

use thiserror::Error;

/// The main error type for gh-harvest
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Extraction Errors
    // ============================================================================
    #[error("API rate limit exhausted ({used}/{limit} requests used)")]
    QuotaExhausted { used: u64, limit: u64 },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Expected a JSON array from '{endpoint}', got {found}")]
    UnexpectedShape { endpoint: String, found: String },

    #[error("Extraction of '{endpoint}' returned no records")]
    EmptyExtraction { endpoint: String },

    // ============================================================================
    // Mapping Errors
    // ============================================================================
    #[error("Record from '{endpoint}' is missing required field '{field}'")]
    Mapping { endpoint: String, field: String },

    // ============================================================================
    // Store Errors
    // ============================================================================
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a mapping error for a missing required field
    pub fn mapping(endpoint: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Mapping {
            endpoint: endpoint.into(),
            field: field.into(),
        }
    }

    /// Check if this error means the API quota is used up
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, Error::QuotaExhausted { .. })
    }
}

/// Result type alias for gh-harvest
pub type Result<T> = std::result::Result<T, Error>;
