//! Apply channel messages from background workers to `AppState`.

use crate::logic;
use crate::state::{AppState, FeedPhase, FeedUpdate, SearchCommit};

/// What: Install a loaded collection and derive everything that depends
/// on it.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `update`: The loader's result, real or fallback.
///
/// Output:
/// - Moves the lifecycle to `Ready`, computes the full-collection stats
///   (once per load, unaffected by filters), and refreshes the view.
pub fn handle_feed_update(app: &mut AppState, update: FeedUpdate) {
    app.used_fallback = update.fell_back;
    app.posts = update.posts;
    app.phase = FeedPhase::Ready;
    app.stats = logic::community_stats(&app.posts, app.member_offset);
    logic::refresh_results(app);
}

/// What: Apply a debounced search commit.
///
/// Output:
/// - `true` when applied; `false` when the commit was stale. Delegates to
///   [`logic::apply_search_commit`], which owns the id check and the
///   page-reset rule.
pub fn handle_search_commit(app: &mut AppState, commit: &SearchCommit) -> bool {
    logic::apply_search_commit(app, commit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::MEMBER_COUNT_OFFSET;
    use crate::sources::fallback_posts;

    #[test]
    /// What: A feed update moves the state to Ready and derives stats once
    ///
    /// - Input: Fallback update on a fresh state
    /// - Output: Collection installed, stats derived from the full set,
    ///   first page visible
    fn feed_update_installs_collection_and_stats() {
        let mut app = AppState::default();
        handle_feed_update(
            &mut app,
            FeedUpdate {
                posts: fallback_posts(),
                fell_back: true,
            },
        );
        assert_eq!(app.phase, FeedPhase::Ready);
        assert!(app.used_fallback);
        assert_eq!(app.stats.post_count, 10);
        // 8 distinct authors in the built-in table
        assert_eq!(app.stats.member_count, 8 + MEMBER_COUNT_OFFSET);
        assert_eq!(app.visible.len(), 6);
        assert_eq!(app.total_pages, 2);
    }

    #[test]
    /// What: Stats ignore active filters
    ///
    /// - Input: Ready state, then a narrowing search
    /// - Output: Stats unchanged while the visible list shrinks
    fn stats_are_independent_of_filters() {
        let mut app = AppState::default();
        handle_feed_update(
            &mut app,
            FeedUpdate {
                posts: fallback_posts(),
                fell_back: true,
            },
        );
        let before = app.stats;
        logic::select_tag(&mut app, "cbc");
        assert!(app.filtered_count < app.posts.len());
        assert_eq!(app.stats, before);
    }
}
