//! Common helpers for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: Mock JokeAPI server and isolated CLI commands
//! - `logger`: Structured test logging

pub mod fixtures;
pub mod logger;
