//! Modularized state module.
//!
//! Value types live in `types`; the mutable container lives in `app_state`.
//! Public API is re-exported under `crate::state::*`.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, FeedPhase};
pub use types::{
    Author, Category, CategoryFilter, CommunityStats, FeedUpdate, FeedView, Post, PostStats,
    QueryInput, Role, SearchCommit, SortMode,
};
