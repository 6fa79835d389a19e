//! HTTP fetcher implementation
//!
//! This module handles the single page request of a run:
//! - Building the HTTP client with timeout, user agent and TLS policy
//! - GET request for the target page
//! - Error classification

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be fetched
///
/// Callers currently only care whether a body arrived; the variants keep the
/// failure reason available for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Request { url: String, message: String },
}

impl FetchError {
    fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();

        if error.is_timeout() {
            Self::Timeout { url }
        } else if error.is_connect() {
            Self::Connect {
                url,
                message: error.to_string(),
            }
        } else if error.is_body() || error.is_decode() {
            Self::Body {
                url,
                message: error.to_string(),
            }
        } else {
            Self::Request {
                url,
                message: error.to_string(),
            }
        }
    }
}

/// Result of a fetch operation: the page body or the reason it is missing
pub type FetchResult = Result<String, FetchError>;

/// Builds an HTTP client with proper configuration
///
/// Certificate validation is switched off when
/// `config.accept_invalid_certs` is set, which is the default: the tool
/// reads arbitrary public sites and the TLS layer is not a trust boundary
/// for it. Redirects follow reqwest's default policy.
///
/// # Example
///
/// ```
/// use link_sieve::config::FetchConfig;
/// use link_sieve::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text
///
/// Any transport error, non-2xx status or unreadable body is reported as a
/// [`FetchError`]. No retries are attempted.
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    tracing::debug!("Fetched {} ({})", response.url(), status);

    response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))
}
