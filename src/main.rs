//! jokebox - JokeAPI client and scientific calculator
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use jokebox::cli::args::OutputFormat;
use jokebox::cli::{Cli, Commands};
use jokebox::core::logging::{self, LogSettings};
use jokebox::render::error::render_error;
use jokebox::storage::{ApiOverrides, ResolvedConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&LogSettings::resolve(
        cli.log_level.as_deref(),
        cli.json_output,
        cli.verbose,
    ));

    let mut style = ErrorStyle::from_flags(&cli);

    match run(&cli, &mut style).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "{e}");
            eprintln!(
                "{}",
                render_error(&e, style.format, style.no_color, style.pretty)
            );
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// How a failure is rendered on stderr.
struct ErrorStyle {
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
}

impl ErrorStyle {
    /// Raw flags only, for errors raised before configuration resolves.
    fn from_flags(cli: &Cli) -> Self {
        Self {
            format: if cli.json {
                OutputFormat::Json
            } else {
                cli.format.unwrap_or_default()
            },
            no_color: !jokebox::util::should_use_color(cli.no_color),
            pretty: cli.pretty,
        }
    }

    fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            format: config.format,
            no_color: !jokebox::util::should_use_color(config.no_color),
            pretty: config.pretty,
        }
    }
}

async fn run(cli: &Cli, style: &mut ErrorStyle) -> jokebox::Result<()> {
    let Some(command) = &cli.command else {
        print_quickstart();
        return Ok(());
    };

    let overrides = match command {
        Commands::Joke(args) => args.overrides(),
        Commands::Url(args) => args.overrides(),
        Commands::Categories | Commands::Calc(_) => ApiOverrides::default(),
    };
    let config = ResolvedConfig::resolve(cli, &overrides)?;
    *style = ErrorStyle::from_config(&config);

    match command {
        Commands::Joke(args) => jokebox::cli::joke::execute(args, &config).await,
        Commands::Url(args) => jokebox::cli::joke::execute_url(args, &config),
        Commands::Categories => jokebox::cli::joke::execute_categories(&config),
        Commands::Calc(args) => jokebox::cli::calc::execute(args, &config),
    }
}

/// Print quickstart help when no command is given.
fn print_quickstart() {
    println!(
        r#"jokebox - JokeAPI client and scientific calculator

USAGE:
    jokebox [OPTIONS] <COMMAND>

COMMANDS:
    joke        Fetch one joke per category
    url         Print the request URL for a category
    categories  List the categories JokeAPI accepts
    calc        Evaluate one calculator operation

QUICK START:
    jokebox joke                      # A joke from the default category
    jokebox joke programming pun      # One joke from each category
    jokebox joke dark --type twopart  # Only two-part jokes
    jokebox url spooky                # Show the request URL
    jokebox calc                      # Show the calculator menu
    jokebox calc sqrt 16              # Evaluate an operation

ROBOT MODE (for AI agents):
    jokebox joke --json               # JSON output
    jokebox joke --format md          # Markdown output

For more help: jokebox --help
"#
    );

    println!("Version: {}", env!("CARGO_PKG_VERSION"));
}
