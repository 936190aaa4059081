//! Error rendering for the process exit path.
//!
//! Errors always go to stderr. Human mode prints one line with the error
//! code; JSON and Markdown modes emit a structured record instead.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::JokeboxError;

/// Render an error for stderr.
#[must_use]
pub fn render_error(
    error: &JokeboxError,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Md => render_error_md(error),
        OutputFormat::Human => render_simple(error, no_color),
    }
}

fn render_simple(error: &JokeboxError, no_color: bool) -> String {
    let label = format!("Error [{}]:", error.error_code());
    if no_color {
        format!("{label} {error}")
    } else {
        format!("{} {error}", label.red().bold())
    }
}

/// JSON representation of an error for machine consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorJson {
    error_code: &'static str,
    category: String,
    message: String,
    exit_code: i32,
}

impl ErrorJson {
    fn from_error(error: &JokeboxError) -> Self {
        Self {
            error_code: error.error_code(),
            category: error.category().to_string(),
            message: error.to_string(),
            exit_code: error.exit_code().into(),
        }
    }
}

/// Render error as structured JSON.
#[must_use]
pub fn render_error_json(error: &JokeboxError, pretty: bool) -> String {
    let error_json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&error_json)
    } else {
        serde_json::to_string(&error_json)
    };
    rendered.unwrap_or_else(|_| render_simple(error, true))
}

fn render_error_md(error: &JokeboxError) -> String {
    format!(
        "## Error\n\n- code: {}\n- category: {}\n- message: {}",
        error.error_code(),
        error.category(),
        error
    )
}
