//! Tracing subscriber setup.
//!
//! Logs go to stderr (or `JOKEBOX_LOG_FILE`) so command output on stdout
//! stays clean. `--json-output` switches to one JSON event per line.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_LEVEL_ENV: &str = "JOKEBOX_LOG";
const LOG_FORMAT_ENV: &str = "JOKEBOX_LOG_FORMAT";
const LOG_FILE_ENV: &str = "JOKEBOX_LOG_FILE";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable logs.
    #[default]
    Human,
    /// JSON logs (one event per line).
    Json,
    /// Single line, terse.
    Compact,
}

impl LogFormat {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" | "pretty" => Some(Self::Human),
            "json" | "jsonl" => Some(Self::Json),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Minimum level that reaches the log sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Parse from CLI argument or env value.
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" | "verbose" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive for `EnvFilter`.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Fully resolved logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Resolve settings from CLI flags, falling back to the `JOKEBOX_LOG*` env vars.
    ///
    /// `--verbose` raises the default level to debug but does not override an
    /// explicit level.
    #[must_use]
    pub fn resolve(cli_level: Option<&str>, json_output: bool, verbose: bool) -> Self {
        let explicit = cli_level
            .and_then(LogLevel::from_arg)
            .or_else(|| env_value(LOG_LEVEL_ENV).as_deref().and_then(LogLevel::from_arg));
        let level = match explicit {
            Some(level) => level,
            None if verbose => LogLevel::Debug,
            None => LogLevel::default(),
        };

        let format = if json_output {
            LogFormat::Json
        } else {
            env_value(LOG_FORMAT_ENV)
                .as_deref()
                .and_then(LogFormat::from_arg)
                .unwrap_or_default()
        };

        Self {
            level,
            format,
            file: env_value(LOG_FILE_ENV).map(PathBuf::from),
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Open `path` for appending. On failure, warn on stderr and return `None`
/// so logging falls back to stderr.
fn open_log_file(path: &Path) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "warning: cannot open log file {}: {e}; logging to stderr",
                path.display()
            );
            None
        }
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jokebox={}", settings.level.as_filter())));

    let file = settings.file.as_deref().and_then(open_log_file);
    let writer = file.map_or_else(
        || BoxMakeWriter::new(std::io::stderr),
        |file| BoxMakeWriter::new(Arc::new(file)),
    );

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    match settings.format {
        LogFormat::Json => builder.json().try_init().ok(),
        LogFormat::Compact => builder.compact().with_target(true).try_init().ok(),
        LogFormat::Human => builder.with_target(false).without_time().try_init().ok(),
    };
}
