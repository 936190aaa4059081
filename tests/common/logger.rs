//! Structured logging for integration tests.
#![allow(dead_code)]
//!
//! Each test creates a [`TestLogger`] and marks its phases so a failing run
//! shows where it stopped and how long it took.
//!
//! ```rust,ignore
//! let log = TestLogger::new("fetch_single_joke");
//! log.phase("setup");
//! // ... mount mocks ...
//! log.phase("verify");
//! log.finish_ok();
//! ```
//!
//! # Environment Variables
//!
//! - `TEST_LOG_LEVEL` - Minimum level: trace, debug, info, warn, error (default: info)
//! - `TEST_LOG_JSON` - "1" or "true" emits one JSON object per line
//! - `NO_COLOR` - Disable colored level tags

use std::env;
use std::fmt::Display;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    const fn ansi(self) -> &'static str {
        match self {
            Self::Trace => "\x1b[90m",
            Self::Debug => "\x1b[36m",
            Self::Info => "\x1b[32m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// One JSON log line.
#[derive(Debug, Serialize)]
pub struct LogEntry<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub test: &'a str,
    pub phase: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
}

struct Settings {
    min_level: LogLevel,
    json: bool,
    color: bool,
}

fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(|| Settings {
        min_level: env::var("TEST_LOG_LEVEL")
            .ok()
            .and_then(|s| LogLevel::parse(&s))
            .unwrap_or(LogLevel::Info),
        json: env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        color: env::var_os("NO_COLOR").is_none(),
    })
}

/// Per-test logger with phase and duration tracking.
pub struct TestLogger {
    test_name: String,
    start: Instant,
    phase: Mutex<String>,
}

impl TestLogger {
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let logger = Self {
            test_name: test_name.to_string(),
            start: Instant::now(),
            phase: Mutex::new("init".to_string()),
        };
        logger.log(LogLevel::Info, "Test starting", None);
        logger
    }

    /// Switch to a new phase (setup, execute, verify, ...).
    pub fn phase(&self, phase: &str) {
        if let Ok(mut current) = self.phase.lock() {
            *current = phase.to_string();
        }
        self.log(LogLevel::Debug, &format!("Phase: {phase}"), None);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    /// Log an outgoing HTTP request.
    pub fn http_request(&self, method: &str, url: &str) {
        self.debug(&format!("HTTP {method} {url}"));
    }

    /// Log a finished command run.
    pub fn command(&self, args: &[&str], exit_code: Option<i32>) {
        self.debug(&format!("jokebox {} -> exit {exit_code:?}", args.join(" ")));
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_ok(&self) {
        let elapsed = self.elapsed_ms();
        self.log(
            LogLevel::Info,
            &format!("Test passed ({elapsed}ms)"),
            Some(elapsed),
        );
    }

    fn log(&self, level: LogLevel, message: &str, elapsed_ms: Option<u64>) {
        let settings = settings();
        if level < settings.min_level {
            return;
        }

        let phase = self
            .phase
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default();
        let timestamp = Utc::now();

        if settings.json {
            let entry = LogEntry {
                timestamp,
                level,
                test: &self.test_name,
                phase: &phase,
                message,
                elapsed_ms,
            };
            if let Ok(json) = serde_json::to_string(&entry) {
                eprintln!("{json}");
            }
            return;
        }

        let ts = timestamp.format("%H:%M:%S%.3f");
        if settings.color {
            eprintln!(
                "[{ts}] [{}{level}\x1b[0m] [{}:{phase}] {message}",
                level.ansi(),
                self.test_name
            );
        } else {
            eprintln!("[{ts}] [{level}] [{}:{phase}] {message}", self.test_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_and_order() {
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("nope"), None);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn entry_serializes_uppercase_level() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            test: "entry",
            phase: "verify",
            message: "ok",
            elapsed_ms: Some(3),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"level\":\"INFO\""));
        assert!(json.contains("\"elapsed_ms\":3"));
    }
}
