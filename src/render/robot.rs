//! Robot-mode output (JSON and Markdown).
//!
//! JSON always goes through the [`RobotOutput`] envelope so scripts see the
//! same top-level shape for every command.

use serde::Serialize;

use crate::calc::Evaluation;
use crate::core::models::{FetchResult, RobotOutput};
use crate::error::Result;

/// Render any serializable value as compact or pretty JSON.
pub fn render_json<T: Serialize>(output: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}

/// Render fetch results as JSON.
pub fn render_jokes_json(results: &[FetchResult], pretty: bool) -> Result<String> {
    render_json(&RobotOutput::jokes(results.to_vec()), pretty)
}

/// Render fetch results as Markdown.
pub fn render_jokes_md(results: &[FetchResult]) -> Result<String> {
    let mut output = String::new();

    for result in results {
        if !result.is_success() {
            output.push_str("## Error\n\n");
            if let Some(kind) = result.error_kind() {
                output.push_str(&format!("- kind: {kind}\n", kind = kind.as_str()));
            }
            output.push_str(&format!("- message: {}\n\n", result.error_message()));
            continue;
        }

        let category = result.category().filter(|c| !c.is_empty()).unwrap_or("Joke");
        output.push_str(&format!("## {category}\n\n"));
        for line in result.lines() {
            output.push_str(line);
            output.push_str("\n\n");
        }

        if let Some(metadata) = result.metadata() {
            if let Some(id) = metadata.id {
                output.push_str(&format!("- id: {id}\n"));
            }
            if let Some(safe) = metadata.safe {
                output.push_str(&format!("- safe: {safe}\n"));
            }
            let flags = metadata.raised_flags();
            if !flags.is_empty() {
                output.push_str(&format!("- flags: {}\n", flags.join(", ")));
            }
            output.push('\n');
        }
    }

    Ok(output)
}

/// Category listing as JSON.
pub fn render_categories_json(categories: &[&str], default: &str, pretty: bool) -> Result<String> {
    #[derive(Serialize)]
    struct Categories<'a> {
        categories: &'a [&'a str],
        default: &'a str,
    }

    let output = RobotOutput::new(
        "categories",
        Categories {
            categories,
            default,
        },
    );
    render_json(&output, pretty)
}

/// Category listing as Markdown.
pub fn render_categories_md(categories: &[&str]) -> Result<String> {
    let mut output = String::from("## Categories\n\n");
    for category in categories {
        output.push_str(&format!("- {category}\n"));
    }
    Ok(output)
}

/// Request URL as JSON.
pub fn render_url_json(category: &str, url: &str, pretty: bool) -> Result<String> {
    #[derive(Serialize)]
    struct Url<'a> {
        category: &'a str,
        url: &'a str,
    }

    render_json(&RobotOutput::new("url", Url { category, url }), pretty)
}

/// Calculator result as JSON.
pub fn render_evaluation_json(evaluation: &Evaluation, pretty: bool) -> Result<String> {
    render_json(&RobotOutput::new("calc", evaluation), pretty)
}

/// Calculator result as Markdown.
pub fn render_evaluation_md(evaluation: &Evaluation) -> Result<String> {
    Ok(format!(
        "## {}\n\n- expression: `{}`\n- result: {}\n",
        evaluation.operation, evaluation.expression, evaluation.result
    ))
}
