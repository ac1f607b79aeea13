//! Query-state transition rules and derived-view recomputation.
//!
//! All mutation of the query dimensions goes through these functions so the
//! page-reset and clamping rules live in exactly one place.

use tokio::sync::mpsc;

use crate::logic::{paging, pipeline};
use crate::state::{AppState, CategoryFilter, QueryInput, SearchCommit, SortMode};

/// What: Recompute everything derived from the collection and query state.
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output:
/// - Updates `filtered_count`, `total_pages`, clamps `page` into range, and
///   rebuilds `visible` for the (possibly clamped) page.
///
/// Details:
/// - A stale page left over from a wider filter is clamped here before
///   slicing, so an out-of-range empty page is never rendered.
pub fn refresh_results(app: &mut AppState) {
    let filtered = pipeline::filter_and_sort(
        &app.posts,
        app.category,
        &app.committed_search,
        app.sort_mode,
    );
    app.filtered_count = filtered.len();
    app.total_pages = paging::total_pages(filtered.len());
    app.page = paging::clamp_page(app.page, app.total_pages);
    app.visible = paging::page_slice(&filtered, app.page).to_vec();
}

/// What: Record a keystroke-level search edit and hand it to the debouncer.
///
/// Inputs:
/// - `app`: Mutable application state; updates `search_input` and the query
///   id counters.
/// - `text`: The full input text after the edit.
/// - `query_tx`: Channel to the debounce worker.
///
/// Output:
/// - Sends a `QueryInput` with a fresh id; the committed search (and thus
///   the visible list) is untouched until the worker's commit arrives.
pub fn send_search_input(
    app: &mut AppState,
    text: &str,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    app.search_input = text.to_owned();
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    let _ = query_tx.send(QueryInput {
        id,
        text: text.to_owned(),
    });
}

/// What: Apply a debounced commit from the search worker.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `commit`: The worker's trailing-edge commit.
///
/// Output:
/// - `true` when the commit was applied; `false` when it was stale (its id
///   is older than the newest input) and therefore discarded.
///
/// Details:
/// - The id check prevents a late commit from overwriting newer input.
/// - An applied commit that actually changes the effective text resets the
///   page to 1.
pub fn apply_search_commit(app: &mut AppState, commit: &SearchCommit) -> bool {
    if commit.id != app.latest_query_id {
        tracing::debug!(id = commit.id, latest = app.latest_query_id, "stale search commit dropped");
        return false;
    }
    if app.committed_search != commit.text {
        app.committed_search = commit.text.clone();
        app.page = 1;
    }
    refresh_results(app);
    true
}

/// What: Apply a tag quick-filter, bypassing the debounce entirely.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `tag`: The tag's literal text.
///
/// Output:
/// - Sets both the raw input and the committed search to `tag`
///   immediately and invalidates any pending debounced commit.
pub fn select_tag(app: &mut AppState, tag: &str) {
    // Burn an id so any in-flight commit from earlier typing is stale.
    app.latest_query_id = app.next_query_id;
    app.next_query_id += 1;
    app.search_input = tag.to_owned();
    if app.committed_search != tag {
        app.committed_search = tag.to_owned();
        app.page = 1;
    }
    refresh_results(app);
}

/// What: Clear the search entirely (the empty-state affordance).
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output:
/// - Blank raw and committed search, pending commits invalidated, page
///   reset, view refreshed.
pub fn clear_search(app: &mut AppState) {
    app.latest_query_id = app.next_query_id;
    app.next_query_id += 1;
    app.search_input.clear();
    if !app.committed_search.is_empty() {
        app.committed_search.clear();
        app.page = 1;
    }
    refresh_results(app);
}

/// What: Switch the category restriction.
///
/// Output: On an actual change, resets the page to 1 and refreshes.
pub fn set_category(app: &mut AppState, category: CategoryFilter) {
    if app.category != category {
        app.category = category;
        app.page = 1;
    }
    refresh_results(app);
}

/// What: Switch the sort mode.
///
/// Output: On an actual change, resets the page to 1 and refreshes.
pub fn set_sort_mode(app: &mut AppState, mode: SortMode) {
    if app.sort_mode != mode {
        app.sort_mode = mode;
        app.page = 1;
    }
    refresh_results(app);
}

/// What: Jump to an explicitly requested page.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `page`: Requested 1-based page; clamped to `[1, total_pages]`.
pub fn set_page(app: &mut AppState, page: usize) {
    app.page = paging::clamp_page(page, app.total_pages);
    refresh_results(app);
}
