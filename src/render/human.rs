//! Human-readable output using `colored`.
//!
//! Every renderer takes `no_color`; when set the output is plain text with no
//! ANSI escapes.

use colored::{ColoredString, Colorize};

use crate::calc::Evaluation;
use crate::core::models::{FetchResult, JokeMetadata};
use crate::error::Result;

/// Apply `style` unless colors are disabled.
fn paint(text: &str, no_color: bool, style: impl FnOnce(&str) -> ColoredString) -> String {
    if no_color {
        text.to_string()
    } else {
        style(text).to_string()
    }
}

/// Render fetch results, one block per result separated by blank lines.
pub fn render_jokes(results: &[FetchResult], no_color: bool) -> Result<String> {
    let blocks: Vec<String> = results
        .iter()
        .map(|result| render_joke(result, no_color))
        .collect();
    Ok(blocks.join("\n"))
}

fn render_joke(result: &FetchResult, no_color: bool) -> String {
    if !result.is_success() {
        let label = paint("Error:", no_color, |t| t.red().bold());
        return format!("{label} {}\n", result.error_message());
    }

    let mut output = String::new();
    if let Some(category) = result.category().filter(|c| !c.is_empty()) {
        let header = format!("[{category}]");
        output.push_str(&paint(&header, no_color, |t| t.cyan().bold()));
        output.push('\n');
    }

    let lines = result.lines();
    for (index, line) in lines.iter().enumerate() {
        // The punchline of a two-part joke stands out.
        if index > 0 {
            output.push_str(&paint(line, no_color, |t| t.green()));
        } else {
            output.push_str(line);
        }
        output.push('\n');
    }

    if let Some(summary) = result.metadata().and_then(metadata_summary) {
        output.push_str(&paint(&summary, no_color, |t| t.dimmed()));
        output.push('\n');
    }

    output
}

fn metadata_summary(metadata: &JokeMetadata) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(id) = metadata.id {
        parts.push(format!("#{id}"));
    }
    match metadata.safe {
        Some(true) => parts.push("safe".to_string()),
        Some(false) => parts.push("unsafe".to_string()),
        None => {}
    }
    let flags = metadata.raised_flags();
    if !flags.is_empty() {
        parts.push(format!("flags: {}", flags.join(", ")));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

/// Render the category allow-list, marking the default.
pub fn render_categories(categories: &[&str], default: &str, no_color: bool) -> Result<String> {
    let mut output = String::new();
    for category in categories {
        if category.eq_ignore_ascii_case(default) {
            let marker = paint("(default)", no_color, |t| t.dimmed());
            output.push_str(&format!("  {category} {marker}\n"));
        } else {
            output.push_str(&format!("  {category}\n"));
        }
    }
    Ok(output)
}

/// Render a calculator result.
pub fn render_evaluation(evaluation: &Evaluation, no_color: bool) -> Result<String> {
    let label = paint("Result:", no_color, |t| t.bold());
    Ok(format!("{label} {}\n", evaluation.expression))
}
