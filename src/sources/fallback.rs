//! Built-in post collection substituted when the remote feed is unreachable.
//!
//! The table is fixed and deterministic: repeated failures always produce an
//! identical collection. It spans every category, carries two pinned
//! announcements, and includes clear extremes for each sort-relevant
//! counter so every sort mode is exercised even offline.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::state::{Author, Category, Post, PostStats, Role};
use crate::util::truncate_chars;

/// Character budget for derived excerpts.
pub const EXCERPT_CHARS: usize = 160;

/// One row of the built-in table, kept as plain static data.
struct Seed {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    category: Category,
    tags: &'static [&'static str],
    author_id: &'static str,
    author_name: &'static str,
    role: Role,
    views: u64,
    replies: u64,
    likes: u64,
    created: i64,
    last_activity: i64,
    solved: bool,
    pinned: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "post-001",
        title: "Community guidelines: read before posting",
        content: "Welcome to the community. Keep discussions respectful, search before \
                  opening a new thread, and flag anything that looks off to the \
                  moderation team. Repeated violations lead to a posting ban.",
        category: Category::Announcements,
        tags: &["guidelines", "moderation"],
        author_id: "member-amina",
        author_name: "Amina Wairimu",
        role: Role::Admin,
        views: 5310,
        replies: 12,
        likes: 88,
        created: 1_736_933_400,       // 2025-01-15 09:30
        last_activity: 1_745_997_000, // 2025-04-30 07:10
        solved: false,
        pinned: true,
    },
    Seed {
        id: "post-002",
        title: "Term 2 opening dates and fee structure",
        content: "Term 2 begins on 5 May for all grades. The updated fee structure is \
                  attached to the school circular; bursary applications close a week \
                  before opening day.",
        category: Category::Announcements,
        tags: &["term-dates", "fees"],
        author_id: "member-amina",
        author_name: "Amina Wairimu",
        role: Role::Admin,
        views: 2840,
        replies: 34,
        likes: 96,
        created: 1_743_580_800,       // 2025-04-02 08:00
        last_activity: 1_745_858_700, // 2025-04-28 16:45
        solved: false,
        pinned: true,
    },
    Seed {
        id: "post-003",
        title: "KNEC releases updated CBC assessment rubrics",
        content: "KNEC has published revised competency rubrics for school-based \
                  assessment. The biggest change is the weighting of project work; \
                  summary of what changed per learning area inside.",
        category: Category::Announcements,
        tags: &["cbc", "assessment"],
        author_id: "member-moderation",
        author_name: "Moderation Desk",
        role: Role::Staff,
        views: 1980,
        replies: 41,
        likes: 73,
        created: 1_745_578_800,       // 2025-04-25 11:00
        last_activity: 1_746_090_300, // 2025-05-01 09:05, newest in the table
        solved: false,
        pinned: false,
    },
    Seed {
        id: "post-004",
        title: "Stuck on Grade 8 algebra: simplifying expressions",
        content: "My daughter keeps mixing up like and unlike terms when simplifying. \
                  We tried the textbook examples but the sign changes trip her up \
                  every time. Any approach that finally made this click?",
        category: Category::AcademicHelp,
        tags: &["grade 8", "mathematics"],
        author_id: "member-brian",
        author_name: "Brian Otieno",
        role: Role::Student,
        views: 860,
        replies: 58, // most-replied post in the table
        likes: 34,
        created: 1_744_986_000,       // 2025-04-18 14:20
        last_activity: 1_745_955_600, // 2025-04-29 19:40
        solved: true,
        pinned: false,
    },
    Seed {
        id: "post-005",
        title: "How do I approach CBC project-based assessments?",
        content: "Our school just switched to project-based assessment for science. \
                  I am not sure how much of the write-up should be mine versus the \
                  group's. How are other schools splitting individual marks?",
        category: Category::AcademicHelp,
        tags: &["cbc", "projects"],
        author_id: "member-faith",
        author_name: "Faith Njeri",
        role: Role::Student,
        views: 640,
        replies: 19,
        likes: 22,
        created: 1_744_280_100,       // 2025-04-10 10:15
        last_activity: 1_745_672_700, // 2025-04-26 13:05
        solved: false,
        pinned: false,
    },
    Seed {
        id: "post-006",
        title: "Revision timetable that finally worked for me",
        content: "After two terms of trial and error I settled on 25-minute blocks \
                  with one subject per evening and a weekly review slot on Saturday \
                  morning. Template and the reasoning behind it below.",
        category: Category::StudyTips,
        tags: &["revision", "planning"],
        author_id: "member-kipchoge",
        author_name: "Mr. Kipchoge",
        role: Role::Instructor,
        views: 3120,
        replies: 27,
        likes: 154, // most-liked post in the table
        created: 1_743_320_700,       // 2025-03-30 07:45
        last_activity: 1_745_785_800, // 2025-04-27 20:30
        solved: false,
        pinned: false,
    },
    Seed {
        id: "post-007",
        title: "Flashcards vs past papers: what moves the needle?",
        content: "With six weeks to the end-of-term exams, is it better to grind \
                  past papers or build a flashcard deck from scratch? I can't fit \
                  both around games practice.",
        category: Category::StudyTips,
        tags: &["revision"],
        author_id: "member-brian",
        author_name: "Brian Otieno",
        role: Role::Student,
        views: 540,
        replies: 9,
        likes: 18,
        created: 1_743_868_800,       // 2025-04-05 16:00
        last_activity: 1_745_315_400, // 2025-04-22 09:50
        solved: false,
        pinned: false,
    },
    Seed {
        id: "post-008",
        title: "Supporting a Grade 8 learner through the JSS transition",
        content: "The jump from primary routines to junior secondary has been rough \
                  on our son: new subjects, longer days, heavier bag. What has \
                  helped other parents keep the first term from overwhelming them?",
        category: Category::ParentsCorner,
        tags: &["grade 8", "jss"],
        author_id: "member-grace",
        author_name: "Grace Muthoni",
        role: Role::Parent,
        views: 720,
        replies: 23,
        likes: 41,
        created: 1_744_482_600,       // 2025-04-12 18:30
        last_activity: 1_745_615_700, // 2025-04-25 21:15
        solved: false,
        pinned: false,
    },
    Seed {
        id: "post-009",
        title: "Introduce yourself: May cohort",
        content: "New to the community this term? Tell us who you are, what you \
                  teach or study, and one thing you want out of this forum.",
        category: Category::General,
        tags: &["welcome"],
        author_id: "member-desk",
        author_name: "Community Desk",
        role: Role::Staff,
        views: 410,
        replies: 16,
        likes: 12,
        created: 1_746_037_200,       // 2025-04-30 18:20
        last_activity: 1_746_037_200,
        solved: false,
        pinned: false,
    },
    Seed {
        id: "post-010",
        title: "Which e-learning platforms pair well with the CBC syllabus?",
        content: "We are piloting tablet lessons next term and shortlisting \
                  platforms with Kenyan CBC-aligned content. Licensing costs and \
                  offline support matter more to us than gamification.",
        category: Category::General,
        tags: &["cbc", "platforms"],
        author_id: "member-edubridge",
        author_name: "EduBridge Kenya",
        role: Role::Partner,
        views: 1150,
        replies: 21,
        likes: 29,
        created: 1_745_152_800,       // 2025-04-20 12:40
        last_activity: 1_745_510_100, // 2025-04-24 15:55
        solved: false,
        pinned: false,
    },
];

/// Epoch seconds to a UTC instant; the table only holds valid values.
fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

fn build() -> Vec<Post> {
    SEEDS
        .iter()
        .map(|seed| Post {
            id: seed.id.to_owned(),
            title: seed.title.to_owned(),
            content: seed.content.to_owned(),
            excerpt: truncate_chars(seed.content, EXCERPT_CHARS),
            category: seed.category,
            tags: seed.tags.iter().map(|t| (*t).to_owned()).collect(),
            author: Author {
                id: seed.author_id.to_owned(),
                name: seed.author_name.to_owned(),
                role: seed.role,
                avatar: None,
            },
            stats: PostStats {
                views: seed.views,
                replies: seed.replies,
                likes: seed.likes,
            },
            created_at: at(seed.created),
            last_activity: at(seed.last_activity),
            solved: seed.solved,
            pinned: seed.pinned,
        })
        .collect()
}

static FALLBACK: OnceLock<Vec<Post>> = OnceLock::new();

/// What: The fixed, deterministic built-in collection.
///
/// Output:
/// - A fresh clone of the 10-entry fallback table, identical on every call.
#[must_use]
pub fn fallback_posts() -> Vec<Post> {
    FALLBACK.get_or_init(build).clone()
}
