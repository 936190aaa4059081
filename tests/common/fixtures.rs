//! Mock JokeAPI server and CLI helpers for integration tests.
#![allow(dead_code)]
//!
//! Joke payloads come from `jokebox::test_utils`; this module mounts them on a
//! wiremock server and builds `jokebox` commands isolated from the host's
//! config and environment.

use std::time::Duration;

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jokebox::ApiConfig;

/// Path prefix the mock API serves jokes under.
pub const JOKE_PATH: &str = "/joke";

/// Environment variables cleared for every spawned command.
const ISOLATED_ENV: &[&str] = &[
    "JOKEBOX_BASE_URL",
    "JOKEBOX_TIMEOUT",
    "JOKEBOX_CATEGORY",
    "JOKEBOX_FORMAT",
    "JOKEBOX_NO_COLOR",
    "JOKEBOX_PRETTY",
    "JOKEBOX_LOG",
    "JOKEBOX_LOG_FORMAT",
    "JOKEBOX_LOG_FILE",
    "RUST_LOG",
];

/// Base URL of the mock joke endpoint.
#[must_use]
pub fn base_url(server: &MockServer) -> String {
    format!("{}{JOKE_PATH}", server.uri())
}

/// Client config pointed at the mock server.
#[must_use]
pub fn api_config(server: &MockServer, timeout: Duration) -> ApiConfig {
    ApiConfig {
        base_url: base_url(server),
        timeout,
    }
}

/// Serve `body` with `status` for `GET /joke/{category}`.
pub async fn mount_joke(server: &MockServer, category: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("{JOKE_PATH}/{category}")))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body, "application/json"),
        )
        .mount(server)
        .await;
}

/// `jokebox` binary with no config file, no color and no inherited settings.
#[must_use]
#[allow(deprecated)]
pub fn jokebox() -> Command {
    let mut cmd = Command::cargo_bin("jokebox").expect("jokebox binary");
    for key in ISOLATED_ENV {
        cmd.env_remove(key);
    }
    cmd.env("JOKEBOX_CONFIG", "/nonexistent/jokebox/config.toml")
        .env("NO_COLOR", "1");
    cmd
}
