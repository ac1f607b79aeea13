//! One-shot browse mode: load the feed once, apply the query, print a page.

use crate::app::handlers::handle_feed_update;
use crate::config::Settings;
use crate::logic;
use crate::sources;
use crate::state::{AppState, CategoryFilter, FeedPhase, SortMode};
use crate::util::ts_to_date;

use super::definition::Args;

/// What: Translate CLI flags into query dimensions, rejecting bad values.
///
/// Output:
/// - `(category, sort)` on success.
///
/// # Errors
/// - A usage message naming the unrecognized category or sort key.
fn resolve_query(args: &Args, settings: &Settings) -> Result<(CategoryFilter, SortMode), String> {
    let category = CategoryFilter::from_key(&args.category)
        .ok_or_else(|| format!("unknown category '{}'", args.category))?;
    let sort = match args.sort.as_deref() {
        Some(key) => {
            SortMode::from_key(key).ok_or_else(|| format!("unknown sort mode '{key}'"))?
        }
        None => settings.default_sort,
    };
    Ok((category, sort))
}

/// What: Render one feed page as plain text.
///
/// Inputs:
/// - `app`: Ready application state.
///
/// Output:
/// - A multi-line string: header with page indicator and community
///   counters, one two-line entry per visible post, and an empty-state
///   hint when search text matched nothing.
#[must_use]
pub fn render_page(app: &AppState) -> String {
    let mut out = String::new();
    let stats = app.stats;
    out.push_str(&format!(
        "Community feed - page {} of {} | {} posts, {} replies, {} members\n",
        app.page, app.total_pages, stats.post_count, stats.reply_count, stats.member_count
    ));
    if app.used_fallback {
        out.push_str("(feed unreachable: showing the built-in dataset)\n");
    }
    out.push('\n');

    if app.empty_due_to_search() {
        out.push_str(&format!(
            "No posts match \"{}\". Clear the search to see the whole feed.\n",
            app.committed_search
        ));
        return out;
    }
    if app.visible.is_empty() {
        out.push_str("No posts in this view.\n");
        return out;
    }

    for post in &app.visible {
        let mut flags = String::new();
        if post.pinned {
            flags.push_str(" [pinned]");
        }
        if post.solved {
            flags.push_str(" [solved]");
        }
        out.push_str(&format!("{}{}\n", post.title, flags));
        out.push_str(&format!(
            "    {} | {} ({}) | {} replies, {} likes, {} views | active {}\n",
            post.category.as_key(),
            post.author.name,
            post.author.role.as_key(),
            post.stats.replies,
            post.stats.likes,
            post.stats.views,
            ts_to_date(Some(post.last_activity.timestamp())),
        ));
    }
    out
}

/// What: Execute browse mode end-to-end.
///
/// Inputs:
/// - `args`: Parsed command line.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Prints the requested page (or counters, or JSON) to stdout.
///
/// # Errors
/// - A usage message for unrecognized category/sort values, or a
///   serialization failure for `--json`.
///
/// Details:
/// - This is the whole mount lifecycle in miniature: one feed load
///   (fallback on failure), query application, synchronous recomputation,
///   render. The debounce worker is not involved; CLI flags are committed
///   values by definition, like tag shortcuts.
pub async fn run_browse(args: &Args, settings: &Settings) -> Result<(), String> {
    let (category, sort) = resolve_query(args, settings)?;

    let mut app = AppState {
        member_offset: settings.member_count_offset,
        phase: FeedPhase::Loading,
        ..Default::default()
    };
    let update = sources::load_feed(
        &sources::http_client(),
        &settings.feed_url,
        settings.feed_limit,
        settings.fetch_timeout_ms,
    )
    .await;
    handle_feed_update(&mut app, update);

    logic::set_category(&mut app, category);
    logic::set_sort_mode(&mut app, sort);
    if let Some(tag) = args.tag.as_deref() {
        logic::select_tag(&mut app, tag);
    } else if let Some(search) = args.search.as_deref() {
        logic::select_tag(&mut app, search);
    }
    logic::set_page(&mut app, args.page);

    if args.stats {
        println!(
            "posts: {}\nreplies: {}\nmembers: {}",
            app.stats.post_count, app.stats.reply_count, app.stats.member_count
        );
        return Ok(());
    }
    if args.json {
        let view = app.view();
        let rendered =
            serde_json::to_string_pretty(&view).map_err(|e| format!("serialize view: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }
    print!("{}", render_page(&app));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::handle_feed_update;
    use crate::sources::fallback_posts;
    use crate::state::FeedUpdate;
    use clap::Parser;

    fn ready_app() -> AppState {
        let mut app = AppState::default();
        handle_feed_update(
            &mut app,
            FeedUpdate {
                posts: fallback_posts(),
                fell_back: true,
            },
        );
        app
    }

    #[test]
    fn resolve_query_rejects_unknown_keys() {
        let settings = Settings::default();
        let bad_cat = Args::parse_from(["baraza", "-c", "nope"]);
        assert!(resolve_query(&bad_cat, &settings).is_err());
        let bad_sort = Args::parse_from(["baraza", "--sort", "upside-down"]);
        assert!(resolve_query(&bad_sort, &settings).is_err());
        let ok = Args::parse_from(["baraza", "-c", "general", "--sort", "popular"]);
        assert!(resolve_query(&ok, &settings).is_ok());
    }

    #[test]
    fn resolve_query_defaults_sort_from_settings() {
        let settings = Settings {
            default_sort: SortMode::MostReplies,
            ..Default::default()
        };
        let args = Args::parse_from(["baraza"]);
        let (_, sort) = resolve_query(&args, &settings).expect("resolve");
        assert_eq!(sort, SortMode::MostReplies);
    }

    #[test]
    /// What: Rendered page carries the header, flags, and entries
    fn render_page_shows_counters_and_pins() {
        let app = ready_app();
        let text = render_page(&app);
        assert!(text.contains("page 1 of 2"));
        assert!(text.contains("10 posts, 260 replies, 150 members"));
        assert!(text.contains("built-in dataset"));
        assert!(text.contains("[pinned]"));
        // six entries on the first page
        assert_eq!(text.matches(" | active ").count(), 6);
    }

    #[test]
    fn render_page_offers_clear_search_on_empty_match() {
        let mut app = ready_app();
        logic::select_tag(&mut app, "quantum chromodynamics");
        let text = render_page(&app);
        assert!(text.contains("No posts match"));
        assert!(text.contains("Clear the search"));
    }
}
