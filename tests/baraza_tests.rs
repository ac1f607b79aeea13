//! Cross-module scenarios over the built-in dataset and the pure pipeline.

use baraza::logic;
use baraza::sources::fallback_posts;
use baraza::state::{Category, CategoryFilter, SortMode};
use baraza::util;

fn ids(posts: &[baraza::state::Post]) -> Vec<&str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn util_truncate_and_extractors() {
    assert_eq!(util::truncate_chars("abcdef", 3), "abc");
    assert_eq!(util::truncate_chars("ab", 3), "ab");

    let v: serde_json::Value = serde_json::json!({
        "title": "t",
        "n": "12",
        "flag": 1,
        "tags": ["a", 5, "b"],
    });
    assert_eq!(util::s(&v, "title"), "t");
    assert_eq!(util::u64_of(&v, &["missing", "n"]), Some(12));
    assert!(util::bool_of(&v, &["flag"]));
    assert_eq!(util::arrs(&v, &["tags"]), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn announcements_latest_puts_pinned_first_by_activity() {
    let posts = fallback_posts();
    let out = logic::filter_and_sort(
        &posts,
        CategoryFilter::Only(Category::Announcements),
        "",
        SortMode::Latest,
    );
    // exactly the three announcement posts: the two pinned ones ordered by
    // last activity, the unpinned one after them
    assert_eq!(ids(&out), vec!["post-001", "post-002", "post-003"]);
    assert!(out[0].pinned && out[1].pinned && !out[2].pinned);
    assert!(out[0].last_activity >= out[1].last_activity);
}

#[test]
fn search_cbc_popular_orders_matches_by_likes() {
    let posts = fallback_posts();
    let out = logic::filter_and_sort(&posts, CategoryFilter::All, "cbc", SortMode::Popular);
    assert_eq!(ids(&out), vec!["post-003", "post-010", "post-005"]);
    for p in &out {
        let needle = "cbc";
        let hit = p.title.to_lowercase().contains(needle)
            || p.excerpt.to_lowercase().contains(needle)
            || p.tags.iter().any(|t| t.to_lowercase().contains(needle));
        assert!(hit, "{} does not match", p.id);
    }
}

#[test]
fn ten_posts_paginate_six_then_four() {
    let posts = fallback_posts();
    let out = logic::filter_and_sort(&posts, CategoryFilter::All, "", SortMode::Latest);
    assert_eq!(out.len(), 10);
    assert_eq!(logic::total_pages(out.len()), 2);

    let page1 = logic::page_slice(&out, 1);
    let page2 = logic::page_slice(&out, 2);
    assert_eq!(page1.len(), 6);
    assert_eq!(page2.len(), 4);
    assert_eq!(
        ids(page1),
        vec!["post-001", "post-002", "post-003", "post-009", "post-004", "post-006"]
    );
    assert_eq!(ids(page2), vec!["post-005", "post-008", "post-010", "post-007"]);
}

#[test]
fn fallback_stats_match_the_table() {
    let posts = fallback_posts();
    let stats = logic::community_stats(&posts, logic::MEMBER_COUNT_OFFSET);
    assert_eq!(stats.post_count, 10);
    assert_eq!(stats.reply_count, 260);
    // 8 distinct authors plus the fixed offset
    assert_eq!(stats.member_count, 150);
}

#[test]
fn pipeline_output_always_satisfies_the_active_predicates() {
    let posts = fallback_posts();
    let searches = ["", "cbc", "grade 8", "revision", "zzz-no-match"];
    let categories = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::General),
        CategoryFilter::Only(Category::AcademicHelp),
        CategoryFilter::Only(Category::StudyTips),
        CategoryFilter::Only(Category::ParentsCorner),
        CategoryFilter::Only(Category::Announcements),
    ];
    for category in categories {
        for search in searches {
            for mode in [SortMode::Latest, SortMode::Popular, SortMode::MostReplies] {
                let out = logic::filter_and_sort(&posts, category, search, mode);
                let needle = search.trim().to_lowercase();
                for p in &out {
                    if let CategoryFilter::Only(c) = category {
                        assert_eq!(p.category, c);
                    }
                    if !needle.is_empty() {
                        let hit = p.title.to_lowercase().contains(&needle)
                            || p.excerpt.to_lowercase().contains(&needle)
                            || p.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                        assert!(hit);
                    }
                }
                // pinned block is always a prefix
                let first_unpinned = out.iter().position(|p| !p.pinned).unwrap_or(out.len());
                assert!(out[first_unpinned..].iter().all(|p| !p.pinned));

                // pages partition the filtered list
                let total = logic::total_pages(out.len());
                let mut rebuilt = Vec::new();
                for page in 1..=total {
                    rebuilt.extend_from_slice(logic::page_slice(&out, page));
                }
                assert_eq!(rebuilt.len(), out.len());
                assert_eq!(total, out.len().div_ceil(logic::PAGE_SIZE).max(1));
            }
        }
    }
}

#[test]
fn repeated_fallbacks_are_byte_identical() {
    let a = serde_json::to_vec(&fallback_posts()).expect("serialize");
    let b = serde_json::to_vec(&fallback_posts()).expect("serialize");
    assert_eq!(a, b);
}
