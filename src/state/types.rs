//! Core value types used by Baraza state.

use chrono::{DateTime, Utc};

/// Discussion category a post belongs to.
///
/// The set is fixed; unknown wire values are coerced to [`Category::General`]
/// at the normalization boundary rather than dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Open discussion without a dedicated board.
    General,
    /// Questions about coursework and assignments.
    AcademicHelp,
    /// Revision strategies and learning techniques.
    StudyTips,
    /// Discussions among parents and guardians.
    ParentsCorner,
    /// Official notices from staff.
    Announcements,
}

impl Category {
    /// Return the string key used on the wire and in settings files.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::AcademicHelp => "academic-help",
            Self::StudyTips => "study-tips",
            Self::ParentsCorner => "parents-corner",
            Self::Announcements => "announcements",
        }
    }

    /// Parse a category from its wire key (case-insensitive).
    ///
    /// Output: `Some(Category)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Some(Self::General),
            "academic-help" => Some(Self::AcademicHelp),
            "study-tips" => Some(Self::StudyTips),
            "parents-corner" => Some(Self::ParentsCorner),
            "announcements" => Some(Self::Announcements),
            _ => None,
        }
    }
}

/// Category dimension of the query state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Keep only posts in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter from a settings/CLI key: `all` or any category key.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::from_key(s).map(Self::Only)
    }

    /// Return the string key for this filter.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.as_key(),
        }
    }
}

/// Role of a post author within the community.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Learner account. Also the safe default for unknown wire values.
    #[default]
    Student,
    /// Parent or guardian account.
    Parent,
    /// Teaching staff.
    Instructor,
    /// Platform administrator.
    Admin,
    /// External partner organization.
    Partner,
    /// Community/moderation staff.
    Staff,
}

impl Role {
    /// Return the string key used on the wire for this role.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
            Self::Partner => "partner",
            Self::Staff => "staff",
        }
    }

    /// Parse a role from its wire key, falling back to [`Role::Student`].
    #[must_use]
    pub fn from_key_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "parent" => Self::Parent,
            "instructor" | "teacher" => Self::Instructor,
            "admin" => Self::Admin,
            "partner" => Self::Partner,
            "staff" | "moderator" => Self::Staff,
            _ => Self::Student,
        }
    }
}

/// Embedded author value on a post.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Author {
    /// Opaque author identifier; distinct values feed the member counter.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Community role.
    pub role: Role,
    /// Optional avatar reference (URL or asset key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Non-negative engagement counters attached to a post.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PostStats {
    /// Number of times the post was opened.
    pub views: u64,
    /// Number of replies in the thread.
    pub replies: u64,
    /// Number of likes received.
    pub likes: u64,
}

/// A single discussion post as seen by the browsing pipeline.
///
/// Materialized once per load, either by normalizing a remote record or from
/// the built-in fallback table, and immutable afterwards.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Post {
    /// Opaque identifier, unique within a collection.
    pub id: String,
    /// Thread title.
    pub title: String,
    /// Full body text.
    pub content: String,
    /// Derived preview text, at most 160 characters of `content`.
    pub excerpt: String,
    /// Board the post belongs to.
    pub category: Category,
    /// Free-form labels; may be empty, order irrelevant.
    pub tags: Vec<String>,
    /// Post author.
    pub author: Author,
    /// Engagement counters.
    pub stats: PostStats,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Instant of most recent activity; never earlier than `created_at`.
    pub last_activity: DateTime<Utc>,
    /// Whether an accepted/resolving reply exists (display-only).
    pub solved: bool,
    /// Pinned posts sort ahead of all others regardless of sort mode.
    pub pinned: bool,
}

/// Sorting mode for the feed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Default: most recent activity first.
    #[default]
    Latest,
    /// Most liked first.
    Popular,
    /// Most replied-to first.
    MostReplies,
}

impl SortMode {
    /// Return the string key used in settings files for this sort mode.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::MostReplies => "most-replies",
        }
    }

    /// Parse a sort mode from its settings key or aliases.
    ///
    /// Output: `Some(SortMode)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "recent" => Some(Self::Latest),
            "popular" | "likes" => Some(Self::Popular),
            "most-replies" | "replies" => Some(Self::MostReplies),
            _ => None,
        }
    }
}

/// Search text sent to the background debounce worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate commits.
    pub id: u64,
    /// Raw search text as currently typed.
    pub text: String,
}

/// Debounced commit corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchCommit {
    /// Echoed identifier from the originating input.
    pub id: u64,
    /// Text to use as the effective search filter.
    pub text: String,
}

/// Result of a feed load, real or fallback.
#[derive(Clone, Debug)]
pub struct FeedUpdate {
    /// The loaded collection.
    pub posts: Vec<Post>,
    /// `true` when the built-in dataset was substituted.
    pub fell_back: bool,
}

/// Summary counters derived from the full, unfiltered collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CommunityStats {
    /// Collection length.
    pub post_count: usize,
    /// Sum of reply counters across all posts.
    pub reply_count: u64,
    /// Distinct author ids plus the configured member offset.
    pub member_count: u64,
}

/// Read-only derived view handed to the rendering layer.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FeedView {
    /// The slice of the filtered, sorted list for the current page.
    pub visible_posts: Vec<Post>,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Current 1-based page, always within range.
    pub current_page: usize,
    /// Full-collection summary counters.
    pub stats: CommunityStats,
}
