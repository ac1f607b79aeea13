//! Baraza binary entrypoint kept minimal. The browsing core lives in the
//! library; this file wires logging, settings, and the CLI together.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

use baraza::args::{self, Args};
use baraza::config;
use baraza::util;

/// Timestamp source for log lines, shared by file and stderr writers.
struct BarazaTimer;

impl tracing_subscriber::fmt::time::FormatTime for BarazaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_secs()).unwrap_or(0),
            Err(_) => 0,
        };
        let s = util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-THH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing, writing to `~/.config/baraza/logs/baraza.log` and
/// falling back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("baraza.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_owned()))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(BarazaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(BarazaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = config::load_settings();
    tracing::info!(feed_url = %settings.feed_url, "Baraza starting");

    if let Err(message) = args::run_browse(&cli, &settings).await {
        eprintln!("baraza: {message}");
        tracing::error!(error = %message, "browse failed");
        std::process::exit(2);
    }
    tracing::info!("Baraza exited");
}
