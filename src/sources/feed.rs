//! Remote feed retrieval under a hard time budget.

use serde_json::Value;
use tokio::time::Duration;

use crate::sources::fallback::fallback_posts;
use crate::sources::normalize::normalize_posts;
use crate::state::{FeedUpdate, Post};

use super::Result;

/// Hard overall budget for the feed request, connection included.
pub const FETCH_TIMEOUT_MS: u64 = 4000;

/// Default number of records requested from the feed endpoint.
pub const DEFAULT_FEED_LIMIT: usize = 50;

/// What: Fetch and normalize the post collection from the remote feed.
///
/// Inputs:
/// - `client`: Shared HTTP client.
/// - `base`: Feed base URL (`{base}/posts?limit=N` is requested).
/// - `limit`: Maximum number of records to request.
/// - `timeout_ms`: Hard overall budget for the whole request.
///
/// Output:
/// - `Ok(Vec<Post>)` with at least one normalized post.
///
/// # Errors
/// - Timeout, connection failure, or a non-2xx status.
/// - A response body that is not valid JSON or not a top-level array.
/// - A payload that is empty after normalization.
pub async fn fetch_posts(
    client: &reqwest::Client,
    base: &str,
    limit: usize,
    timeout_ms: u64,
) -> Result<Vec<Post>> {
    let url = format!("{}/posts?limit={limit}", base.trim_end_matches('/'));
    tracing::debug!(url = %url, timeout_ms, "requesting feed");

    let request = async {
        let response = client.get(&url).send().await?.error_for_status()?;
        let payload: Value = response.json().await?;
        Ok::<Value, Box<dyn std::error::Error + Send + Sync>>(payload)
    };
    let payload = tokio::time::timeout(Duration::from_millis(timeout_ms), request)
        .await
        .map_err(|_| format!("feed request exceeded {timeout_ms} ms"))??;

    let Some(records) = payload.as_array() else {
        return Err("feed payload is not an array".into());
    };
    let posts = normalize_posts(records);
    if posts.is_empty() {
        return Err("feed payload empty after normalization".into());
    }
    Ok(posts)
}

/// What: Load the collection, substituting the built-in dataset on failure.
///
/// Inputs: Same as [`fetch_posts`].
///
/// Output:
/// - Always a usable `FeedUpdate`; `fell_back` is set when the fixed
///   dataset was substituted. No error escapes to the caller and nothing
///   is retried; availability wins over freshness here.
pub async fn load_feed(
    client: &reqwest::Client,
    base: &str,
    limit: usize,
    timeout_ms: u64,
) -> FeedUpdate {
    match fetch_posts(client, base, limit, timeout_ms).await {
        Ok(posts) => {
            tracing::info!(count = posts.len(), "feed loaded");
            FeedUpdate {
                posts,
                fell_back: false,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "feed unavailable; using built-in dataset");
            FeedUpdate {
                posts: fallback_posts(),
                fell_back: true,
            }
        }
    }
}
