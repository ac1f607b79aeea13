//! Core non-UI logic split into modular submodules.

pub mod paging;
pub mod pipeline;
pub mod query;
pub mod stats;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use paging::{PAGE_SIZE, clamp_page, page_slice, total_pages};
pub use pipeline::filter_and_sort;
pub use query::{
    apply_search_commit, clear_search, refresh_results, select_tag, send_search_input,
    set_category, set_page, set_sort_mode,
};
pub use stats::{MEMBER_COUNT_OFFSET, community_stats};
