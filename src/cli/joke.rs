//! Joke, url and categories command implementations.

use crate::cli::args::{JokeArgs, UrlArgs};
use crate::core::category::{ALLOWED_CATEGORIES, is_allowed_category, normalize_category};
use crate::core::fetch::JokeClient;
use crate::core::models::FetchResult;
use crate::core::request::build_request;
use crate::error::{JokeboxError, Result};
use crate::render;
use crate::storage::ResolvedConfig;
use crate::util::should_use_color;

/// Execute the joke command.
pub async fn execute(args: &JokeArgs, config: &ResolvedConfig) -> Result<()> {
    let categories = requested_categories(&args.categories, &config.default_category);
    tracing::debug!(
        ?categories,
        filter = ?args.joke_type,
        base_url = %config.api.base_url,
        "Starting joke fetch"
    );

    let client = JokeClient::new(&config.api)?;
    let results = client
        .fetch_many(&categories, args.joke_type.as_deref())
        .await;

    let output = render::render_jokes(
        &results,
        config.format,
        config.pretty,
        !should_use_color(config.no_color),
    )?;
    print!("{output}");

    check_results(&results)
}

/// Normalize the requested categories, falling back to `default`.
///
/// Categories outside the known list are logged and still passed through;
/// the API reports them as errors.
pub(crate) fn requested_categories(requested: &[String], default: &str) -> Vec<String> {
    let raw: Vec<&str> = if requested.is_empty() {
        vec![default]
    } else {
        requested.iter().map(String::as_str).collect()
    };

    raw.into_iter()
        .map(|category| {
            let normalized = normalize_category(category);
            if !is_allowed_category(&normalized) {
                tracing::warn!(
                    category = %normalized,
                    known = ?ALLOWED_CATEGORIES,
                    "Unknown joke category"
                );
            }
            normalized
        })
        .collect()
}

/// Map failed fetches to [`JokeboxError::FetchFailed`].
pub(crate) fn check_results(results: &[FetchResult]) -> Result<()> {
    let failed = results.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        return Err(JokeboxError::FetchFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Execute the url command.
pub fn execute_url(args: &UrlArgs, config: &ResolvedConfig) -> Result<()> {
    let category = normalize_category(&args.category);
    let url = build_request(&config.api.base_url, &category, args.joke_type.as_deref());
    print!(
        "{}",
        render::render_url(&category, &url, config.format, config.pretty)?
    );
    Ok(())
}

/// Execute the categories command.
pub fn execute_categories(config: &ResolvedConfig) -> Result<()> {
    let default = normalize_category(&config.default_category);
    let output = render::render_categories(
        &ALLOWED_CATEGORIES,
        &default,
        config.format,
        config.pretty,
        !should_use_color(config.no_color),
    )?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::FetchError;
    use tracing_test::traced_test;

    #[test]
    fn empty_request_uses_default() {
        assert_eq!(requested_categories(&[], "pun"), vec!["Pun"]);
    }

    #[test]
    fn categories_are_normalized() {
        let requested = vec!["programming".to_string(), " DARK ".to_string()];
        assert_eq!(
            requested_categories(&requested, "Any"),
            vec!["Programming", "Dark"]
        );
    }

    #[test]
    #[traced_test]
    fn unknown_category_warns_and_passes_through() {
        let requested = vec!["knock-knock".to_string()];
        assert_eq!(requested_categories(&requested, "Any"), vec!["Knock-knock"]);
        assert!(logs_contain("Unknown joke category"));
    }

    #[test]
    fn all_success_is_ok() {
        let results = vec![FetchResult::single("A joke", "Pun")];
        assert!(check_results(&results).is_ok());
    }

    #[test]
    fn any_failure_is_fetch_failed() {
        let results = vec![
            FetchResult::single("A joke", "Pun"),
            FetchResult::failure(&FetchError::Timeout),
        ];
        let err = check_results(&results).unwrap_err();
        assert!(matches!(
            err,
            JokeboxError::FetchFailed {
                failed: 1,
                total: 2
            }
        ));
    }
}
