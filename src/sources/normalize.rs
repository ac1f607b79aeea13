//! Defensive raw→domain mapping for remote feed records.
//!
//! The remote payload is loosely typed: fields may be absent, renamed, or
//! wrongly typed. Everything downstream of this boundary only ever sees the
//! strict [`Post`] shape, so every field is coerced here rather than
//! trusted.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::sources::fallback::EXCERPT_CHARS;
use crate::state::{Author, Category, Post, PostStats, Role};
use crate::util::{arrs, bool_of, s, ss, truncate_chars, u64_of};

/// What: Parse an instant from any of the usual wire representations.
///
/// Inputs:
/// - `v`: Record object.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - `Some(DateTime<Utc>)` for an RFC 3339 string or an epoch number
///   (seconds, or milliseconds when the magnitude says so); `None`
///   otherwise.
fn parse_instant(v: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    for k in keys {
        let Some(raw) = v.get(*k) else { continue };
        if let Some(text) = raw.as_str()
            && let Ok(parsed) = DateTime::parse_from_rfc3339(text)
        {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Some(n) = raw.as_i64() {
            // Millisecond epochs are 13+ digits; anything near that range
            // is treated as millis.
            let parsed = if n.abs() >= 100_000_000_000 {
                DateTime::from_timestamp_millis(n)
            } else {
                DateTime::from_timestamp(n, 0)
            };
            if let Some(t) = parsed {
                return Some(t);
            }
        }
    }
    None
}

/// What: Coerce the embedded author value, defaulting every field.
fn normalize_author(v: &Value, index: usize) -> Author {
    let obj = v.get("author").filter(|a| a.is_object());
    let Some(a) = obj else {
        return Author {
            id: format!("member-{}", index + 1),
            name: "Community member".to_owned(),
            role: Role::default(),
            avatar: None,
        };
    };
    let id = ss(a, &["id", "_id", "userId"])
        .or_else(|| u64_of(a, &["id", "_id", "userId"]).map(|n| n.to_string()))
        .unwrap_or_else(|| format!("member-{}", index + 1));
    let name = ss(a, &["name", "username", "displayName"])
        .unwrap_or_else(|| "Community member".to_owned());
    Author {
        id,
        name,
        role: Role::from_key_or_default(&s(a, "role")),
        avatar: ss(a, &["avatar", "avatarUrl", "photo"]),
    }
}

/// What: Coerce one raw record into the strict [`Post`] shape.
///
/// Inputs:
/// - `v`: Raw record (any JSON value; non-objects still yield a post).
/// - `index`: Position in the payload, used to synthesize missing ids.
/// - `now`: Instant substituted for missing or unparseable timestamps.
///
/// Output:
/// - A fully defaulted `Post`: synthesized id, coerced category and role,
///   excerpt within budget, counters at 0 when absent, and
///   `last_activity` repaired to never precede `created_at`.
#[must_use]
pub fn normalize_post(v: &Value, index: usize, now: DateTime<Utc>) -> Post {
    let id = ss(v, &["id", "_id", "postId"])
        .or_else(|| u64_of(v, &["id", "_id", "postId"]).map(|n| n.to_string()))
        .unwrap_or_else(|| format!("post-{}", index + 1));
    let title = ss(v, &["title", "subject"]).unwrap_or_else(|| "Untitled post".to_owned());
    let content = ss(v, &["content", "body", "text"]).unwrap_or_default();
    let excerpt = ss(v, &["excerpt", "summary"])
        .map_or_else(|| truncate_chars(&content, EXCERPT_CHARS), |e| {
            truncate_chars(&e, EXCERPT_CHARS)
        });
    let category = Category::from_key(&s(v, "category")).unwrap_or(Category::General);

    // Counters may be nested under `stats` or flat on the record.
    let stats_obj = v.get("stats").filter(|x| x.is_object()).unwrap_or(v);
    let stats = PostStats {
        views: u64_of(stats_obj, &["views", "viewCount"]).unwrap_or(0),
        replies: u64_of(stats_obj, &["replies", "replyCount", "comments"]).unwrap_or(0),
        likes: u64_of(stats_obj, &["likes", "likeCount", "upvotes"]).unwrap_or(0),
    };

    let created_at = parse_instant(v, &["timestamp", "createdAt", "created_at"]).unwrap_or(now);
    let last_activity = parse_instant(v, &["lastActivity", "last_activity", "updatedAt"])
        .unwrap_or(created_at)
        .max(created_at);

    Post {
        id,
        title,
        content,
        excerpt,
        category,
        tags: arrs(v, &["tags", "labels"]),
        author: normalize_author(v, index),
        stats,
        created_at,
        last_activity,
        solved: bool_of(v, &["solved", "isSolved"]),
        pinned: bool_of(v, &["pinned", "isPinned", "sticky"]),
    }
}

/// What: Normalize a whole payload array.
///
/// Output: One `Post` per element, in payload order; nothing is dropped.
#[must_use]
pub fn normalize_posts(raw: &[Value]) -> Vec<Post> {
    let now = Utc::now();
    raw.iter()
        .enumerate()
        .map(|(i, v)| normalize_post(v, i, now))
        .collect()
}
