//! Core data models, request building, and the joke fetcher.

pub mod category;
pub mod fetch;
pub mod http;
pub mod logging;
pub mod models;
pub mod request;

pub use category::{ALLOWED_CATEGORIES, DEFAULT_CATEGORY, is_allowed_category, normalize_category};
pub use fetch::{ApiConfig, FetchError, JokeClient, normalize_response};
pub use http::{HttpResponse, ReqwestTransport, Transport, TransportError};
pub use models::{FetchErrorKind, FetchResult, JokeMetadata, JokeVariant, RobotOutput};
pub use request::{API_BASE_URL, JOKE_TYPE_FILTERS, build_joke_url, build_request};
