//! Background tasks: the search debouncer and the one-shot feed loader.

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::sources;
use crate::state::{FeedUpdate, QueryInput, SearchCommit};

/// Quiet period after the last keystroke before a search commit fires.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// What: Spawn the debounce worker for search input.
///
/// Inputs:
/// - `query_rx`: Channel receiver for keystroke-level inputs.
/// - `commit_tx`: Channel sender for trailing-edge commits.
///
/// Details:
/// - Coalesces bursts: every new input restarts the quiet period, so at
///   most one commit fires per pause in typing and it always carries the
///   newest text.
/// - The commit echoes the input id; the handler uses it to discard
///   commits that raced with even newer input or a tag shortcut.
pub fn spawn_search_debouncer(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    commit_tx: mpsc::UnboundedSender<SearchCommit>,
) {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(newer) = query_rx.recv() => { latest = newer; }
                    () = sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)) => { break; }
                }
            }
            let _ = commit_tx.send(SearchCommit {
                id: latest.id,
                text: latest.text,
            });
        }
    });
}

/// What: Spawn the single feed load for this mount.
///
/// Inputs:
/// - `client`: Shared HTTP client.
/// - `base`, `limit`, `timeout_ms`: Feed endpoint parameters.
/// - `feed_tx`: Channel sender for the resulting collection.
///
/// Details:
/// - Called exactly once per mount. The update is always sent; on any
///   failure it carries the built-in dataset, so the consumer never stays
///   in a loading or error state.
pub fn spawn_feed_loader(
    client: reqwest::Client,
    base: String,
    limit: usize,
    timeout_ms: u64,
    feed_tx: mpsc::UnboundedSender<FeedUpdate>,
) {
    tokio::spawn(async move {
        let update = sources::load_feed(&client, &base, limit, timeout_ms).await;
        let _ = feed_tx.send(update);
    });
}
