//! HTTP transport.
//!
//! [`Transport`] is the seam between the fetch normalizer and the network.
//! [`ReqwestTransport`] is the real implementation; tests substitute a stub.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use thiserror::Error;

use crate::error::{JokeboxError, Result};

/// Default timeout for joke requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A completed HTTP exchange, regardless of status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase for `status` (e.g. "Not Found").
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    /// Build a response, deriving the reason phrase from the status code.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason_phrase(status),
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Why a request produced no response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other failure reported by the HTTP client.
    #[error("{0}")]
    Request(String),

    /// A failure outside the HTTP client's own error model.
    #[error("{0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Issues a single GET and returns the raw response.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str)
    -> impl Future<Output = std::result::Result<HttpResponse, TransportError>> + Send;
}

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("jokebox/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| JokeboxError::Network(e.to_string()))
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        // reqwest does not expose the phrase the server sent; use the canonical one.
        let body = response.text().await?;
        Ok(HttpResponse::new(status, body))
    }
}

/// Canonical reason phrase for a status code, `"Unknown"` when there is none.
#[must_use]
pub fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown")
        .to_string()
}
