//! Joke categories.
//!
//! The allow-list is informational: the request builder does not enforce it.
//! Callers normalize free-form input with [`normalize_category`] and may check
//! [`is_allowed_category`] before fetching.

/// Categories JokeAPI serves.
pub const ALLOWED_CATEGORIES: [&str; 7] = [
    "Any",
    "Programming",
    "Miscellaneous",
    "Dark",
    "Pun",
    "Spooky",
    "Christmas",
];

/// Category used when the caller does not name one.
pub const DEFAULT_CATEGORY: &str = "Any";

/// Capitalize free-form input: first character upper-case, the rest lower-case.
///
/// Surrounding whitespace is trimmed.
#[must_use]
pub fn normalize_category(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Whether `category` is on the allow-list (exact match).
#[must_use]
pub fn is_allowed_category(category: &str) -> bool {
    ALLOWED_CATEGORIES.contains(&category)
}
