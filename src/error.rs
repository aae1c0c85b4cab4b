//! Error types for external services and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// A call to an external lookup service did not produce a usable response.
///
/// The resolver recovers from these locally; they never reach the user.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{service} returned status {status}")]
    Status {
        service: &'static str,
        status: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Configuration could not be assembled; fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Google Maps API key is not set (use GOOGLE_MAPS_API_KEY or [google].api_key)")]
    MissingApiKey,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Invalid service base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}
