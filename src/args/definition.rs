//! Command-line argument definition.

use clap::Parser;

/// Baraza - browse a community discussion feed from the terminal
#[derive(Parser, Debug)]
#[command(name = "baraza")]
#[command(version)]
#[command(about = "Browse a community discussion feed: filter, search, sort, paginate", long_about = None)]
pub struct Args {
    /// Restrict to one category (general, academic-help, study-tips,
    /// parents-corner, announcements) or `all`
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Free-text search over titles, excerpts, and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Tag quick-filter; takes precedence over --search
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Sort mode (latest, popular, most-replies); defaults to the
    /// settings value
    #[arg(long)]
    pub sort: Option<String>,

    /// 1-based page to display (clamped into range)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Print the derived view as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print only the community summary counters
    #[arg(long)]
    pub stats: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Resolve the effective log level from the parsed arguments.
///
/// Output:
/// - `"debug"` when `--verbose` is set, the `--log-level` value otherwise.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_owned()
    } else {
        args.log_level.clone()
    }
}
