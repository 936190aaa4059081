//! Test utilities for jokebox.
//!
//! Provides a scripted [`Transport`] and JokeAPI payload fixtures for use
//! across unit and integration tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jokebox::test_utils::*;
//!
//! let stub = StubTransport::respond(200, single_joke_body());
//! let client = JokeClient::with_transport(stub.clone(), "https://jokes.test/joke");
//! let result = client.fetch("Programming").await;
//! assert_eq!(stub.requested_urls().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::core::http::{HttpResponse, Transport, TransportError};

// =============================================================================
// Stub Transport
// =============================================================================

/// Transport that returns the same canned outcome for every request and
/// records the URLs it was asked for.
#[derive(Debug, Clone)]
pub struct StubTransport {
    outcome: Result<HttpResponse, TransportError>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    /// Answer every request with `status` and `body`.
    #[must_use]
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: Ok(HttpResponse::new(status, body)),
            requests: Arc::default(),
        }
    }

    /// Fail every request with `error`.
    #[must_use]
    pub fn fail(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::default(),
        }
    }

    /// URLs requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the request log mutex is poisoned.
    #[must_use]
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        self.outcome.clone()
    }
}

// =============================================================================
// Payload Fixtures
// =============================================================================

fn safe_flags() -> serde_json::Value {
    json!({
        "nsfw": false,
        "religious": false,
        "political": false,
        "racist": false,
        "sexist": false,
        "explicit": false
    })
}

/// Single-text joke as JokeAPI returns it.
#[must_use]
pub fn single_joke_payload() -> serde_json::Value {
    json!({
        "error": false,
        "category": "Programming",
        "type": "single",
        "joke": "Why do Java developers wear glasses? Because they don't C#",
        "flags": safe_flags(),
        "id": 2,
        "safe": true,
        "lang": "en"
    })
}

/// Setup/delivery joke as JokeAPI returns it.
#[must_use]
pub fn two_part_joke_payload() -> serde_json::Value {
    json!({
        "error": false,
        "category": "Miscellaneous",
        "type": "twopart",
        "setup": "Why did the scarecrow win an award?",
        "delivery": "Because he was outstanding in his field!",
        "flags": safe_flags(),
        "id": 1,
        "safe": true,
        "lang": "en"
    })
}

/// Logical error reported with a 2xx status.
#[must_use]
pub fn api_error_payload() -> serde_json::Value {
    json!({
        "error": true,
        "internalError": false,
        "code": 106,
        "message": "No jokes found with the specified filters",
        "causedBy": ["No jokes were found that match your provided filter(s)"]
    })
}

#[must_use]
pub fn single_joke_body() -> String {
    single_joke_payload().to_string()
}

#[must_use]
pub fn two_part_joke_body() -> String {
    two_part_joke_payload().to_string()
}

#[must_use]
pub fn api_error_body() -> String {
    api_error_payload().to_string()
}
