//! Network data retrieval and the raw→domain normalization boundary.

pub mod fallback;
pub mod feed;
pub mod normalize;

/// Shared error alias for retrieval code.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Build the HTTP client shared by all feed requests.
///
/// Output:
/// - A `reqwest::Client` with a descriptive user agent. Per-request
///   deadlines are enforced by the caller, not the client.
#[must_use]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("baraza/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

pub use fallback::{EXCERPT_CHARS, fallback_posts};
pub use feed::{DEFAULT_FEED_LIMIT, FETCH_TIMEOUT_MS, fetch_posts, load_feed};
pub use normalize::{normalize_post, normalize_posts};
