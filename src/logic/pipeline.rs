//! Pure filter + sort pipeline over the full post collection.

use crate::state::{CategoryFilter, Post, SortMode};

/// What: Decide whether a post matches the committed search text.
///
/// Inputs:
/// - `post`: Candidate post.
/// - `needle`: Already-lowercased search text (non-blank).
///
/// Output:
/// - `true` when the lowercased title, excerpt, or any lowercased tag
///   contains `needle` as a literal substring.
fn matches_search(post: &Post, needle: &str) -> bool {
    if post.title.to_lowercase().contains(needle) {
        return true;
    }
    if post.excerpt.to_lowercase().contains(needle) {
        return true;
    }
    post.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// What: Map the full collection plus query dimensions to an ordered list.
///
/// Inputs:
/// - `posts`: Full, unfiltered collection.
/// - `category`: Active category restriction.
/// - `search`: Committed search text (raw; blank means no text filter).
/// - `mode`: Active sort mode.
///
/// Output:
/// - A new vector of matching posts, stably sorted: pinned posts always
///   first, then by the mode's key descending. Ties keep input order.
///
/// Details:
/// - Pure function of its inputs; no I/O and no state access. This is the
///   unit-test seam for ordering and matching behavior.
#[must_use]
pub fn filter_and_sort(
    posts: &[Post],
    category: CategoryFilter,
    search: &str,
    mode: SortMode,
) -> Vec<Post> {
    let needle = search.trim().to_lowercase();
    let mut out: Vec<Post> = posts
        .iter()
        .filter(|p| match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => p.category == c,
        })
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .cloned()
        .collect();
    // `sort_by` is stable, so equal keys retain their input order.
    out.sort_by(|a, b| {
        let pin = b.pinned.cmp(&a.pinned);
        if pin != std::cmp::Ordering::Equal {
            return pin;
        }
        match mode {
            SortMode::Latest => b.last_activity.cmp(&a.last_activity),
            SortMode::Popular => b.stats.likes.cmp(&a.stats.likes),
            SortMode::MostReplies => b.stats.replies.cmp(&a.stats.replies),
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Author, Category, PostStats, Role};
    use chrono::DateTime;

    fn post(id: &str, category: Category, pinned: bool) -> Post {
        let at = DateTime::from_timestamp(1_700_000_000, 0).expect("valid ts");
        Post {
            id: id.to_string(),
            title: format!("{id} title"),
            content: format!("{id} content"),
            excerpt: format!("{id} content"),
            category,
            tags: Vec::new(),
            author: Author {
                id: format!("author-{id}"),
                name: id.to_string(),
                role: Role::Student,
                avatar: None,
            },
            stats: PostStats::default(),
            created_at: at,
            last_activity: at,
            solved: false,
            pinned,
        }
    }

    fn with_likes(mut p: Post, likes: u64) -> Post {
        p.stats.likes = likes;
        p
    }

    fn with_replies(mut p: Post, replies: u64) -> Post {
        p.stats.replies = replies;
        p
    }

    fn with_activity(mut p: Post, secs: i64) -> Post {
        p.last_activity = DateTime::from_timestamp(secs, 0).expect("valid ts");
        p
    }

    #[test]
    /// What: Category restriction keeps only exact matches
    ///
    /// - Input: Mixed categories; filter on announcements
    /// - Output: Every surviving post is an announcement
    fn category_filter_is_exact() {
        let posts = vec![
            post("a", Category::General, false),
            post("b", Category::Announcements, false),
            post("c", Category::StudyTips, false),
            post("d", Category::Announcements, true),
        ];
        let out = filter_and_sort(
            &posts,
            CategoryFilter::Only(Category::Announcements),
            "",
            SortMode::Latest,
        );
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.category == Category::Announcements));

        let all = filter_and_sort(&posts, CategoryFilter::All, "", SortMode::Latest);
        assert_eq!(all.len(), 4);
    }

    #[test]
    /// What: Search matches title, excerpt, or tags, case-insensitively
    ///
    /// - Input: Needle present in different fields across posts
    /// - Output: Only those posts survive; blank needle keeps everything
    fn search_matches_title_excerpt_and_tags() {
        let mut by_title = post("t", Category::General, false);
        by_title.title = "Algebra Homework Tips".into();
        let mut by_excerpt = post("e", Category::General, false);
        by_excerpt.excerpt = "struggling with ALGEBRA today".into();
        let mut by_tag = post("g", Category::General, false);
        by_tag.tags = vec!["algebra".into(), "maths".into()];
        let unrelated = post("u", Category::General, false);

        let posts = vec![by_title, by_excerpt, by_tag, unrelated];
        let out = filter_and_sort(&posts, CategoryFilter::All, "aLgEbRa", SortMode::Latest);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&"u"));

        let blank = filter_and_sort(&posts, CategoryFilter::All, "   ", SortMode::Latest);
        assert_eq!(blank.len(), 4);
    }

    #[test]
    /// What: Pinned posts lead the output for every sort mode
    ///
    /// - Input: One pinned post with the weakest sort keys
    /// - Output: It still sorts first under latest, popular, and most-replies
    fn pinned_precedes_for_every_mode() {
        let posts = vec![
            with_activity(
                with_replies(with_likes(post("hot", Category::General, false), 500), 90),
                1_700_009_000,
            ),
            with_activity(post("pin", Category::General, true), 1_700_000_100),
        ];
        for mode in [SortMode::Latest, SortMode::Popular, SortMode::MostReplies] {
            let out = filter_and_sort(&posts, CategoryFilter::All, "", mode);
            assert_eq!(out[0].id, "pin", "mode {mode:?}");
        }
    }

    #[test]
    /// What: Secondary key ordering per mode
    ///
    /// - Input: Unpinned posts with distinct activity/likes/replies
    /// - Output: Descending by the mode's key
    fn secondary_keys_order_descending() {
        let posts = vec![
            with_activity(
                with_replies(with_likes(post("a", Category::General, false), 5), 40),
                1_700_000_010,
            ),
            with_activity(
                with_replies(with_likes(post("b", Category::General, false), 50), 4),
                1_700_000_020,
            ),
            with_activity(
                with_replies(with_likes(post("c", Category::General, false), 20), 10),
                1_700_000_030,
            ),
        ];
        let latest = filter_and_sort(&posts, CategoryFilter::All, "", SortMode::Latest);
        assert_eq!(
            latest.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["c", "b", "a"]
        );
        let popular = filter_and_sort(&posts, CategoryFilter::All, "", SortMode::Popular);
        assert_eq!(
            popular.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );
        let replies = filter_and_sort(&posts, CategoryFilter::All, "", SortMode::MostReplies);
        assert_eq!(
            replies.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c", "b"]
        );
    }

    #[test]
    /// What: Equal keys keep their input order (stability)
    ///
    /// - Input: Three posts with identical likes
    /// - Output: Popular sort preserves input order
    fn equal_keys_are_stable() {
        let posts = vec![
            with_likes(post("first", Category::General, false), 7),
            with_likes(post("second", Category::General, false), 7),
            with_likes(post("third", Category::General, false), 7),
        ];
        let out = filter_and_sort(&posts, CategoryFilter::All, "", SortMode::Popular);
        assert_eq!(
            out.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
    }
}
