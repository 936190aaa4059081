//! Configuration file loading and management.
//!
//! Loads configuration from:
//! - Linux: `~/.config/jokebox/config.toml`
//! - macOS: `~/Library/Application Support/dev.jokebox.jokebox/config.toml`
//! - Windows: `%APPDATA%/jokebox/jokebox/config/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `JOKEBOX_BASE_URL`: API base URL
//! - `JOKEBOX_TIMEOUT`: Request timeout in seconds
//! - `JOKEBOX_CATEGORY`: Default joke category
//! - `JOKEBOX_FORMAT`: Output format (human, json, md)
//! - `JOKEBOX_NO_COLOR` or `NO_COLOR`: Disable colors
//! - `JOKEBOX_PRETTY`: Pretty-print JSON output (1, true, yes)
//! - `JOKEBOX_CONFIG`: Override config file path

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat};
use crate::core::category::DEFAULT_CATEGORY;
use crate::core::fetch::ApiConfig;
use crate::core::http::DEFAULT_TIMEOUT;
use crate::core::request::API_BASE_URL;
use crate::error::{JokeboxError, Result};

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "JOKEBOX_BASE_URL";
pub const ENV_TIMEOUT: &str = "JOKEBOX_TIMEOUT";
pub const ENV_CATEGORY: &str = "JOKEBOX_CATEGORY";
pub const ENV_FORMAT: &str = "JOKEBOX_FORMAT";
pub const ENV_NO_COLOR: &str = "JOKEBOX_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
pub const ENV_PRETTY: &str = "JOKEBOX_PRETTY";
pub const ENV_CONFIG: &str = "JOKEBOX_CONFIG";

/// Accepted request timeout range, in seconds.
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=60;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Per-command overrides for the API settings.
#[derive(Debug, Clone, Default)]
pub struct ApiOverrides {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Endpoint and timeout handed to the joke client.
    pub api: ApiConfig,
    /// Category fetched when none is given on the command line.
    pub default_category: String,
    pub format: OutputFormat,
    pub no_color: bool,
    pub pretty: bool,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub base_url: ConfigSource,
    pub timeout: ConfigSource,
    pub default_category: ConfigSource,
    pub format: ConfigSource,
    pub no_color: ConfigSource,
    pub pretty: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    ConfigFile,
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, environment variables, and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid, or if any
    /// resolved value is out of range.
    pub fn resolve(cli: &Cli, overrides: &ApiOverrides) -> Result<Self> {
        let config = Config::load_from(&Self::config_path(cli))?;
        config.validate()?;
        Self::from_parts(cli, overrides, &config)
    }

    /// Merge an already-loaded config file with CLI flags and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a CLI or environment value is invalid.
    pub fn from_parts(cli: &Cli, overrides: &ApiOverrides, config: &Config) -> Result<Self> {
        let mut sources = ConfigSources::default();

        let base_url = Self::resolve_base_url(overrides, config, &mut sources.base_url)?;
        let timeout = Self::resolve_timeout(overrides, config, &mut sources.timeout)?;
        let default_category = Self::resolve_category(config, &mut sources.default_category);
        let format = Self::resolve_format(cli, config, &mut sources.format)?;
        let no_color = Self::resolve_no_color(cli, config, &mut sources.no_color);
        let pretty = Self::resolve_pretty(cli, config, &mut sources.pretty);

        tracing::debug!(?sources, "Configuration resolved");

        Ok(Self {
            api: ApiConfig { base_url, timeout },
            default_category,
            format,
            no_color,
            pretty,
            sources,
        })
    }

    /// Config file path: `--config`, then `JOKEBOX_CONFIG`, then the platform default.
    #[must_use]
    pub fn config_path(cli: &Cli) -> PathBuf {
        cli.config
            .clone()
            .or_else(|| env_nonempty(ENV_CONFIG).map(PathBuf::from))
            .unwrap_or_else(|| AppPaths::new().config_file())
    }

    fn resolve_base_url(
        overrides: &ApiOverrides,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<String> {
        let (url, from) = if let Some(url) = &overrides.base_url {
            (url.clone(), ConfigSource::Cli)
        } else if let Some(url) = env_nonempty(ENV_BASE_URL) {
            (url, ConfigSource::Env)
        } else if let Some(url) = &config.api.base_url {
            (url.clone(), ConfigSource::ConfigFile)
        } else {
            (API_BASE_URL.to_string(), ConfigSource::Default)
        };

        validate_base_url(&url)?;
        *source = from;
        Ok(url)
    }

    fn resolve_timeout(
        overrides: &ApiOverrides,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<Duration> {
        let (seconds, from) = if let Some(seconds) = overrides.timeout_seconds {
            (seconds, ConfigSource::Cli)
        } else if let Some(raw) = env_nonempty(ENV_TIMEOUT) {
            let seconds = raw.parse::<u64>().map_err(|_| JokeboxError::ConfigInvalid {
                key: ENV_TIMEOUT.to_string(),
                value: raw.clone(),
                message: "expected a whole number of seconds".to_string(),
            })?;
            (seconds, ConfigSource::Env)
        } else if let Some(seconds) = config.api.timeout_seconds {
            (seconds, ConfigSource::ConfigFile)
        } else {
            (DEFAULT_TIMEOUT.as_secs(), ConfigSource::Default)
        };

        validate_timeout(seconds)?;
        *source = from;
        Ok(Duration::from_secs(seconds))
    }

    fn resolve_category(config: &Config, source: &mut ConfigSource) -> String {
        if let Some(category) = env_nonempty(ENV_CATEGORY) {
            *source = ConfigSource::Env;
            return category;
        }
        if let Some(category) = &config.api.default_category {
            *source = ConfigSource::ConfigFile;
            return category.clone();
        }
        *source = ConfigSource::Default;
        DEFAULT_CATEGORY.to_string()
    }

    fn resolve_format(
        cli: &Cli,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        if cli.json {
            *source = ConfigSource::Cli;
            return Ok(OutputFormat::Json);
        }
        if let Some(format) = cli.format {
            *source = ConfigSource::Cli;
            return Ok(format);
        }
        if let Some(format_env) = env_nonempty(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return parse_format(&format_env);
        }
        if let Some(format) = &config.output.format {
            *source = ConfigSource::ConfigFile;
            return parse_format(format);
        }
        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    fn resolve_no_color(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }
        // NO_COLOR disables color whatever its value.
        if is_env_truthy(ENV_NO_COLOR) || std::env::var_os(ENV_NO_COLOR_STD).is_some() {
            *source = ConfigSource::Env;
            return true;
        }
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }
        *source = ConfigSource::Default;
        false
    }

    fn resolve_pretty(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }
        if is_env_truthy(ENV_PRETTY) {
            *source = ConfigSource::Env;
            return true;
        }
        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }
        *source = ConfigSource::Default;
        false
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_env_truthy(var: &str) -> bool {
    std::env::var(var)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Parse a format string into `OutputFormat`.
fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        "md" | "markdown" => Ok(OutputFormat::Md),
        _ => Err(JokeboxError::Config(format!(
            "Invalid format \"{s}\". Valid formats: human, json, md"
        ))),
    }
}

fn validate_base_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(JokeboxError::ConfigInvalid {
            key: "api.base_url".to_string(),
            value: url.to_string(),
            message: "must start with http:// or https://".to_string(),
        })
    }
}

fn validate_timeout(seconds: u64) -> Result<()> {
    if TIMEOUT_RANGE.contains(&seconds) {
        Ok(())
    } else {
        Err(JokeboxError::ConfigInvalid {
            key: "api.timeout_seconds".to_string(),
            value: seconds.to_string(),
            message: format!(
                "Timeout must be between {} and {} seconds",
                TIMEOUT_RANGE.start(),
                TIMEOUT_RANGE.end()
            ),
        })
    }
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub output: OutputConfig,
}

/// `[api]` section. Unset keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, md).
    pub format: Option<String>,
    pub color: bool,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| JokeboxError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JokeboxError::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)?;
        tracing::debug!(?path, "Config file saved");
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns error for a non-HTTP base URL, a timeout outside 1-60 seconds,
    /// an empty default category, or an unknown output format.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url {
            validate_base_url(url)?;
        }
        if let Some(seconds) = self.api.timeout_seconds {
            validate_timeout(seconds)?;
        }

        if self
            .api
            .default_category
            .as_deref()
            .is_some_and(|category| category.trim().is_empty())
        {
            return Err(JokeboxError::ConfigInvalid {
                key: "api.default_category".to_string(),
                value: String::new(),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(format) = &self.output.format {
            parse_format(format)?;
        }

        Ok(())
    }
}
