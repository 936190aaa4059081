//! Joke fetching and response normalization.
//!
//! [`JokeClient::fetch`] never fails: every outcome, including transport
//! failures and malformed payloads, is folded into a [`FetchResult`].

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::http::{DEFAULT_TIMEOUT, HttpResponse, ReqwestTransport, Transport, TransportError};
use super::models::{FetchErrorKind, FetchResult, JokeMetadata};
use super::request::{API_BASE_URL, build_request};
use crate::error::Result;

/// Why a fetch did not produce a joke. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timed out. The API is taking too long to respond.")]
    Timeout,

    #[error("Connection failed. Please check your internet connection and try again.")]
    ConnectionFailed,

    #[error("HTTP Error {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Failed to parse API response. Invalid JSON received.")]
    MalformedResponse,

    #[error("JokeAPI error: {0}")]
    Api(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Timeout => FetchErrorKind::Timeout,
            Self::ConnectionFailed => FetchErrorKind::ConnectionFailure,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            Self::Request(_) => FetchErrorKind::Request,
            Self::MalformedResponse => FetchErrorKind::MalformedResponse,
            Self::Api(_) => FetchErrorKind::Api,
            Self::Unexpected(_) => FetchErrorKind::Unexpected,
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout => Self::Timeout,
            TransportError::Connect(_) => Self::ConnectionFailed,
            TransportError::Request(cause) => Self::Request(cause),
            TransportError::Unexpected(cause) => Self::Unexpected(cause),
        }
    }
}

/// Endpoint settings for [`JokeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Joke text fields of a JokeAPI body. Both shapes share one struct; `type`
/// picks the fields. The `error` marker and the metadata are read separately
/// from the raw value so they can never reject an otherwise valid joke.
#[derive(Debug, Deserialize)]
struct ApiPayload {
    #[serde(rename = "type")]
    kind: Option<String>,
    joke: Option<String>,
    setup: Option<String>,
    delivery: Option<String>,
    category: Option<String>,
}

/// Client for the joke API.
#[derive(Debug, Clone)]
pub struct JokeClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl JokeClient<ReqwestTransport> {
    /// Create a client that talks to `config.base_url` over HTTP.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(transport, config.base_url.clone()))
    }
}

impl<T: Transport> JokeClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Fetch one joke from `category`.
    pub async fn fetch(&self, category: &str) -> FetchResult {
        self.fetch_filtered(category, None).await
    }

    /// Fetch one joke from `category`, optionally restricted to a joke type.
    ///
    /// Unrecognized filters are dropped by the request builder.
    pub async fn fetch_filtered(&self, category: &str, filter: Option<&str>) -> FetchResult {
        let url = build_request(&self.base_url, category, filter);
        tracing::debug!(%url, category, "Fetching joke");

        match self.transport.get(&url).await {
            Ok(response) => normalize_response(&response),
            Err(e) => {
                let error = FetchError::from(e);
                tracing::warn!(%url, error = %error, "Joke request failed");
                FetchResult::failure(&error)
            }
        }
    }

    /// Fetch one joke per category, one request at a time, in order.
    pub async fn fetch_many<S: AsRef<str>>(
        &self,
        categories: &[S],
        filter: Option<&str>,
    ) -> Vec<FetchResult> {
        let mut results = Vec::with_capacity(categories.len());
        for category in categories {
            results.push(self.fetch_filtered(category.as_ref(), filter).await);
        }
        results
    }
}

/// Turn a completed HTTP exchange into a [`FetchResult`].
#[must_use]
pub fn normalize_response(response: &HttpResponse) -> FetchResult {
    match parse_response(response) {
        Ok(result) => {
            tracing::debug!(
                variant = ?result.variant(),
                category = result.category().unwrap_or_default(),
                "Joke fetched"
            );
            result
        }
        Err(error) => {
            tracing::warn!(status = response.status, error = %error, "Joke response rejected");
            FetchResult::failure(&error)
        }
    }
}

fn parse_response(response: &HttpResponse) -> std::result::Result<FetchResult, FetchError> {
    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status,
            reason: response.reason.clone(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(&response.body).map_err(|_| FetchError::MalformedResponse)?;

    if !value.is_object() {
        return Err(FetchError::Unexpected(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }

    if value.get("error").is_some_and(is_truthy) {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Unknown error");
        return Err(FetchError::Api(message.to_string()));
    }

    let payload =
        ApiPayload::deserialize(&value).map_err(|e| FetchError::Unexpected(e.to_string()))?;

    let metadata = extract_metadata(&value);
    let category = payload.category.unwrap_or_default();

    let result = if payload.kind.as_deref() == Some("twopart") {
        FetchResult::two_part(
            payload.setup.unwrap_or_default(),
            payload.delivery.unwrap_or_default(),
            category,
        )
    } else {
        FetchResult::single(payload.joke.unwrap_or_default(), category)
    };

    Ok(result.with_metadata(metadata))
}

/// JSON truthiness: `null`, `false`, zero and empty values are false.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(map) => !map.is_empty(),
    }
}

/// Best-effort metadata. Missing or mistyped entries are dropped.
fn extract_metadata(value: &serde_json::Value) -> JokeMetadata {
    let flags: BTreeMap<String, bool> = value
        .get("flags")
        .and_then(serde_json::Value::as_object)
        .map(|flags| {
            flags
                .iter()
                .filter_map(|(name, set)| set.as_bool().map(|set| (name.clone(), set)))
                .collect()
        })
        .unwrap_or_default();

    JokeMetadata {
        id: value.get("id").and_then(serde_json::Value::as_u64),
        safe: value.get("safe").and_then(serde_json::Value::as_bool),
        flags,
    }
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
