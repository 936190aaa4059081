//! jokebox - JokeAPI client and scientific calculator.
//!
//! The library half builds JokeAPI request URLs, fetches jokes over HTTP and
//! folds every outcome into a [`FetchResult`](crate::core::models::FetchResult).
//! The binary wraps it in a CLI with layered configuration and human, JSON
//! or Markdown output.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod calc;
pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;
pub mod util;

/// Test utilities module - included in test builds or when test-utils feature is enabled.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::fetch::{ApiConfig, JokeClient};
pub use crate::core::models::FetchResult;
pub use crate::core::request::build_request;
pub use error::{ExitCode, JokeboxError, Result};

// Re-export test utilities for external test crates
#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::*;
