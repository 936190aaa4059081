//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::calc::Evaluation;
use crate::cli::args::OutputFormat;
use crate::core::models::FetchResult;
use crate::error::Result;

/// Render joke fetch results.
pub fn render_jokes(
    results: &[FetchResult],
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_jokes(results, no_color),
        OutputFormat::Json => robot::render_jokes_json(results, pretty),
        OutputFormat::Md => robot::render_jokes_md(results),
    }
}

/// Render the category allow-list.
pub fn render_categories(
    categories: &[&str],
    default: &str,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_categories(categories, default, no_color),
        OutputFormat::Json => robot::render_categories_json(categories, default, pretty),
        OutputFormat::Md => robot::render_categories_md(categories),
    }
}

/// Render a built request URL.
pub fn render_url(category: &str, url: &str, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format!("{url}\n")),
        OutputFormat::Json => robot::render_url_json(category, url, pretty),
        OutputFormat::Md => Ok(format!("- {category}: <{url}>\n")),
    }
}

/// Render a calculator result.
pub fn render_evaluation(
    evaluation: &Evaluation,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_evaluation(evaluation, no_color),
        OutputFormat::Json => robot::render_evaluation_json(evaluation, pretty),
        OutputFormat::Md => robot::render_evaluation_md(evaluation),
    }
}
