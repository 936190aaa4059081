//! Request URL construction for JokeAPI.

/// Default JokeAPI endpoint.
pub const API_BASE_URL: &str = "https://v2.jokeapi.dev/joke";

/// Joke type filters accepted by the `type` query parameter.
pub const JOKE_TYPE_FILTERS: [&str; 2] = ["single", "twopart"];

/// Build the request URL for `category` against `base`.
///
/// `category` is inserted verbatim as a path segment. `filter` is appended as
/// `?type=<filter>` only when it is one of [`JOKE_TYPE_FILTERS`]; any other
/// value is dropped and the unfiltered URL is returned.
///
/// ```
/// use jokebox::core::request::build_request;
///
/// let base = "https://v2.jokeapi.dev/joke";
/// assert_eq!(
///     build_request(base, "Programming", Some("single")),
///     "https://v2.jokeapi.dev/joke/Programming?type=single"
/// );
/// assert_eq!(
///     build_request(base, "Programming", Some("knock-knock")),
///     "https://v2.jokeapi.dev/joke/Programming"
/// );
/// ```
#[must_use]
pub fn build_request(base: &str, category: &str, filter: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), category);

    match filter {
        Some(kind) if JOKE_TYPE_FILTERS.contains(&kind) => {
            url.push_str("?type=");
            url.push_str(kind);
        }
        Some(kind) => {
            tracing::debug!(filter = kind, "Ignoring unrecognized joke type filter");
        }
        None => {}
    }

    url
}

/// Build the request URL against the public JokeAPI endpoint.
#[must_use]
pub fn build_joke_url(category: &str, filter: Option<&str>) -> String {
    build_request(API_BASE_URL, category, filter)
}
