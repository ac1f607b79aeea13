//! Central `AppState` container for the browsing surface.

use crate::state::types::{
    CategoryFilter, CommunityStats, FeedView, Post, SortMode,
};

/// Lifecycle of the backing collection.
///
/// There are no further transitions after `Ready`; pipeline, paging, and
/// stats are pure recomputations from then on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedPhase {
    /// No load has been initiated yet.
    #[default]
    Uninitialized,
    /// The single fetch for this mount is in flight.
    Loading,
    /// A collection (real or fallback) is available.
    Ready,
}

/// State shared by the query, networking, and presentation layers.
///
/// Query dimensions are mutated only through the transition functions in
/// [`crate::logic::query`]; everything under "derived" is recomputed from
/// `posts` plus the query dimensions and is read-only for consumers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Raw search text as typed, shown in the input field.
    pub search_input: String,
    /// Committed (debounced) search text used for filtering.
    pub committed_search: String,
    /// Active category restriction.
    pub category: CategoryFilter,
    /// Active sort mode.
    pub sort_mode: SortMode,
    /// Current 1-based page.
    pub page: usize,

    /// Full, unfiltered collection for this mount.
    pub posts: Vec<Post>,
    /// Where the collection is in its load lifecycle.
    pub phase: FeedPhase,
    /// Whether the built-in dataset was substituted for the remote feed.
    pub used_fallback: bool,

    // Derived, recomputed by `logic::query::refresh_results`
    /// Number of posts surviving the active filters.
    pub filtered_count: usize,
    /// Total pages for the filtered list (at least 1).
    pub total_pages: usize,
    /// Visible slice for the current page.
    pub visible: Vec<Post>,
    /// Full-collection counters, computed once per load.
    pub stats: CommunityStats,

    // Search coordination
    /// Identifier of the newest input sent to the debounce worker.
    pub latest_query_id: u64,
    /// Next input identifier to allocate.
    pub next_query_id: u64,

    /// Offset added to the distinct-author count when deriving members.
    pub member_offset: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            committed_search: String::new(),
            category: CategoryFilter::All,
            sort_mode: SortMode::Latest,
            page: 1,
            posts: Vec::new(),
            phase: FeedPhase::Uninitialized,
            used_fallback: false,
            filtered_count: 0,
            total_pages: 1,
            visible: Vec::new(),
            stats: CommunityStats::default(),
            latest_query_id: 0,
            next_query_id: 1,
            member_offset: crate::logic::stats::MEMBER_COUNT_OFFSET,
        }
    }
}

impl AppState {
    /// Whether the feed is still waiting on its one fetch.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading)
    }

    /// Whether the current empty result was caused by search text.
    ///
    /// Consumers use this to offer a "clear search" affordance instead of a
    /// plain empty list.
    #[must_use]
    pub fn empty_due_to_search(&self) -> bool {
        self.phase == FeedPhase::Ready
            && self.filtered_count == 0
            && !self.committed_search.trim().is_empty()
    }

    /// Snapshot the read-only derived view for the rendering layer.
    #[must_use]
    pub fn view(&self) -> FeedView {
        FeedView {
            visible_posts: self.visible.clone(),
            total_pages: self.total_pages,
            current_page: self.page,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_on_page_one_uninitialized() {
        let app = AppState::default();
        assert_eq!(app.page, 1);
        assert_eq!(app.total_pages, 1);
        assert_eq!(app.phase, FeedPhase::Uninitialized);
        assert!(!app.is_loading());
        assert!(app.visible.is_empty());
    }

    #[test]
    fn empty_due_to_search_requires_ready_and_text() {
        let mut app = AppState::default();
        assert!(!app.empty_due_to_search());
        app.phase = FeedPhase::Ready;
        assert!(!app.empty_due_to_search());
        app.committed_search = "chemistry".into();
        assert!(app.empty_due_to_search());
        app.filtered_count = 3;
        assert!(!app.empty_due_to_search());
    }
}
