//! Summary counters derived from the full, unfiltered collection.

use std::collections::HashSet;

use crate::state::{CommunityStats, Post};

/// Offset added to the distinct-author count when deriving `member_count`.
///
/// Carried over from the product's historical behavior; its business
/// meaning is undocumented, so it is kept as a named constant and may be
/// overridden through the `member_count_offset` setting rather than
/// reinterpreted.
pub const MEMBER_COUNT_OFFSET: u64 = 142;

/// What: Aggregate summary counters from the whole collection.
///
/// Inputs:
/// - `posts`: Full, unfiltered collection (not the filtered/paginated view).
/// - `member_offset`: Offset added to the distinct-author count.
///
/// Output:
/// - `CommunityStats` with the collection length, the reply-counter sum,
///   and the distinct-author count plus `member_offset`.
///
/// Details:
/// - Runs once per collection load; active filters never affect it.
#[must_use]
pub fn community_stats(posts: &[Post], member_offset: u64) -> CommunityStats {
    let reply_count = posts.iter().map(|p| p.stats.replies).sum();
    let authors: HashSet<&str> = posts.iter().map(|p| p.author.id.as_str()).collect();
    CommunityStats {
        post_count: posts.len(),
        reply_count,
        member_count: u64::try_from(authors.len()).unwrap_or(u64::MAX) + member_offset,
    }
}
