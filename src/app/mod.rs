//! Runtime wiring between the consumer's event loop and the background
//! workers.
//!
//! The consumer owns the loop: it calls the `logic::query` transitions on
//! user events and drains `commit_rx`/`feed_rx` through the handlers here.
//! Baraza itself runs this wiring in the one-shot CLI (`crate::args`).

pub mod handlers;
pub mod workers;

use tokio::sync::mpsc;

use crate::config::Settings;
use crate::sources;
use crate::state::{AppState, FeedPhase, FeedUpdate, QueryInput, SearchCommit};

pub use handlers::{handle_feed_update, handle_search_commit};
pub use workers::{SEARCH_DEBOUNCE_MS, spawn_feed_loader, spawn_search_debouncer};

/// Channel endpoints connecting state owners to background workers.
pub struct Channels {
    /// Keystroke-level search inputs, consumed by the debounce worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Trailing-edge search commits from the debounce worker.
    pub commit_rx: mpsc::UnboundedReceiver<SearchCommit>,
    /// Sender handed to the feed loader.
    pub feed_tx: mpsc::UnboundedSender<FeedUpdate>,
    /// The loaded collection (real or fallback), exactly one per mount.
    pub feed_rx: mpsc::UnboundedReceiver<FeedUpdate>,
}

impl Channels {
    /// What: Create the channel pairs and spawn the debounce worker.
    #[must_use]
    pub fn new() -> Self {
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (commit_tx, commit_rx) = mpsc::unbounded_channel();
        let (feed_tx, feed_rx) = mpsc::unbounded_channel();
        spawn_search_debouncer(query_rx, commit_tx);
        Self {
            query_tx,
            commit_rx,
            feed_tx,
            feed_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// What: Kick off the single feed load for this mount.
///
/// Inputs:
/// - `app`: Mutable application state; moves to `Loading`.
/// - `settings`: Feed endpoint parameters.
/// - `feed_tx`: Sender from [`Channels`].
///
/// Details:
/// - The loading flag stays up until the `FeedUpdate` arrives; the update
///   is guaranteed to arrive (fallback on any failure), so the consumer
///   always converges to a usable collection.
pub fn start_feed_load(
    app: &mut AppState,
    settings: &Settings,
    feed_tx: &mpsc::UnboundedSender<FeedUpdate>,
) {
    app.phase = FeedPhase::Loading;
    spawn_feed_loader(
        sources::http_client(),
        settings.feed_url.clone(),
        settings.feed_limit,
        settings.fetch_timeout_ms,
        feed_tx.clone(),
    );
}
