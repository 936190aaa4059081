//! Core data models.
//!
//! [`FetchResult`] is the normalized record every joke fetch produces,
//! whether the call succeeded or failed.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fetch::FetchError;

// =============================================================================
// Joke Variant
// =============================================================================

/// Which payload shape the API returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokeVariant {
    /// One block of text.
    Single,
    /// Setup followed by a delivery line.
    TwoPart,
}

impl JokeVariant {
    /// Wire name used by the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::TwoPart => "twopart",
        }
    }
}

impl std::fmt::Display for JokeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Failure classification carried alongside the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Timeout,
    ConnectionFailure,
    HttpStatus,
    Request,
    MalformedResponse,
    Api,
    Unexpected,
}

impl FetchErrorKind {
    /// Stable snake_case name, matching the JSON form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::ConnectionFailure => "connection_failure",
            Self::HttpStatus => "http_status",
            Self::Request => "request",
            Self::MalformedResponse => "malformed_response",
            Self::Api => "api",
            Self::Unexpected => "unexpected",
        }
    }
}

// =============================================================================
// Joke Metadata
// =============================================================================

/// Extra payload details reported on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<bool>,

    /// Content flags (`nsfw`, `religious`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, bool>,
}

impl JokeMetadata {
    /// Names of the content flags that are set.
    #[must_use]
    pub fn raised_flags(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|(_, set)| **set)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

// =============================================================================
// Fetch Result
// =============================================================================

/// Outcome of one joke fetch.
///
/// On success exactly one of `primary_text` or the `setup_text` /
/// `followup_text` pair is set. On failure every payload field is `None` and
/// `error_message` is non-empty. Fields are read-only; the only way to build a
/// value is through [`FetchResult::single`], [`FetchResult::two_part`] or
/// [`FetchResult::failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    success: bool,
    variant: Option<JokeVariant>,
    primary_text: Option<String>,
    setup_text: Option<String>,
    followup_text: Option<String>,
    category: Option<String>,
    error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<FetchErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<JokeMetadata>,
}

impl FetchResult {
    /// Successful single-text joke.
    #[must_use]
    pub fn single(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            success: true,
            variant: Some(JokeVariant::Single),
            primary_text: Some(text.into()),
            setup_text: None,
            followup_text: None,
            category: Some(category.into()),
            error_message: String::new(),
            error_kind: None,
            metadata: None,
        }
    }

    /// Successful setup/delivery joke.
    #[must_use]
    pub fn two_part(
        setup: impl Into<String>,
        followup: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            variant: Some(JokeVariant::TwoPart),
            primary_text: None,
            setup_text: Some(setup.into()),
            followup_text: Some(followup.into()),
            category: Some(category.into()),
            error_message: String::new(),
            error_kind: None,
            metadata: None,
        }
    }

    /// Failed fetch. The message is the error's display text.
    #[must_use]
    pub fn failure(error: &FetchError) -> Self {
        Self {
            success: false,
            variant: None,
            primary_text: None,
            setup_text: None,
            followup_text: None,
            category: None,
            error_message: error.to_string(),
            error_kind: Some(error.kind()),
            metadata: None,
        }
    }

    /// Attach payload metadata. Ignored on failures.
    #[must_use]
    pub fn with_metadata(mut self, metadata: JokeMetadata) -> Self {
        if self.success {
            self.metadata = Some(metadata);
        }
        self
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub const fn variant(&self) -> Option<JokeVariant> {
        self.variant
    }

    #[must_use]
    pub fn primary_text(&self) -> Option<&str> {
        self.primary_text.as_deref()
    }

    #[must_use]
    pub fn setup_text(&self) -> Option<&str> {
        self.setup_text.as_deref()
    }

    #[must_use]
    pub fn followup_text(&self) -> Option<&str> {
        self.followup_text.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Empty on success.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub const fn error_kind(&self) -> Option<FetchErrorKind> {
        self.error_kind
    }

    #[must_use]
    pub const fn metadata(&self) -> Option<&JokeMetadata> {
        self.metadata.as_ref()
    }

    /// Joke text as display lines: one for single jokes, two for two-part.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self.variant {
            Some(JokeVariant::Single) => self.primary_text().into_iter().collect(),
            Some(JokeVariant::TwoPart) => self
                .setup_text()
                .into_iter()
                .chain(self.followup_text())
                .collect(),
            None => Vec::new(),
        }
    }
}

// =============================================================================
// Robot Output
// =============================================================================

/// Envelope for JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOutput<T> {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,
    pub errors: Vec<String>,
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self::with_errors(command, data, Vec::new())
    }

    /// Create with errors.
    pub fn with_errors(command: impl Into<String>, data: T, errors: Vec<String>) -> Self {
        Self {
            schema_version: "jokebox.v1".to_string(),
            generated_at: Utc::now(),
            command: command.into(),
            data,
            errors,
        }
    }
}

impl RobotOutput<Vec<FetchResult>> {
    /// Create a joke output envelope; failed results contribute their messages to `errors`.
    #[must_use]
    pub fn jokes(results: Vec<FetchResult>) -> Self {
        let errors = results
            .iter()
            .filter(|r| !r.is_success())
            .map(|r| r.error_message().to_string())
            .collect();
        Self::with_errors("joke", results, errors)
    }
}
