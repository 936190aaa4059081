//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::storage::ApiOverrides;

/// Jokebox - fetch jokes from JokeAPI and run quick calculations.
#[derive(Parser, Debug)]
#[command(name = "jokebox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format [default: human]
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one joke per category
    Joke(JokeArgs),

    /// Print the request URL for a category without fetching
    Url(UrlArgs),

    /// List the categories JokeAPI accepts
    Categories,

    /// Evaluate one scientific calculator operation
    Calc(CalcArgs),
}

/// Arguments for the `joke` command.
#[derive(Parser, Debug, Default)]
pub struct JokeArgs {
    /// Categories to fetch (default: configured category)
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Joke type filter (single or twopart)
    #[arg(long = "type", value_name = "TYPE")]
    pub joke_type: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl JokeArgs {
    /// Per-command API overrides.
    #[must_use]
    pub fn overrides(&self) -> ApiOverrides {
        ApiOverrides {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout,
        }
    }
}

/// Arguments for the `url` command.
#[derive(Parser, Debug)]
pub struct UrlArgs {
    /// Category to build the URL for
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Joke type filter (single or twopart)
    #[arg(long = "type", value_name = "TYPE")]
    pub joke_type: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl UrlArgs {
    /// Per-command API overrides.
    #[must_use]
    pub fn overrides(&self) -> ApiOverrides {
        ApiOverrides {
            base_url: self.base_url.clone(),
            timeout_seconds: None,
        }
    }
}

/// Arguments for the `calc` command.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Operation: menu number (1-10), name, or symbol
    #[arg(value_name = "OP")]
    pub operation: Option<String>,

    /// Operands
    #[arg(value_name = "OPERANDS", allow_negative_numbers = true)]
    pub operands: Vec<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Markdown output
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn joke_args_parse() {
        let cli = Cli::parse_from([
            "jokebox",
            "joke",
            "programming",
            "pun",
            "--type",
            "single",
            "--timeout",
            "3",
        ]);
        let Some(Commands::Joke(args)) = cli.command else {
            panic!("expected joke command");
        };
        assert_eq!(args.categories, vec!["programming", "pun"]);
        assert_eq!(args.joke_type.as_deref(), Some("single"));
        assert_eq!(args.overrides().timeout_seconds, Some(3));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["jokebox", "categories", "--json", "--no-color"]);
        assert!(cli.json);
        assert!(cli.no_color);
        assert!(cli.format.is_none());
    }

    #[test]
    fn calc_accepts_negative_operands() {
        let cli = Cli::parse_from(["jokebox", "calc", "add", "-2", "3.5"]);
        let Some(Commands::Calc(args)) = cli.command else {
            panic!("expected calc command");
        };
        assert_eq!(args.operation.as_deref(), Some("add"));
        assert_eq!(args.operands, vec!["-2", "3.5"]);
    }

    #[test]
    fn calc_without_operation() {
        let cli = Cli::parse_from(["jokebox", "calc"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Calc(CalcArgs { operation: None, .. }))
        ));
    }
}
