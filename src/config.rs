//! Settings file loading and configuration paths.
//!
//! Settings live in `~/.config/baraza/settings.conf` (or under
//! `$XDG_CONFIG_HOME`), one `key = value` per line with `#`, `//`, or `;`
//! comments. Unknown keys are ignored and missing keys keep their
//! defaults, so a partial file is always valid.

use std::env;
use std::path::{Path, PathBuf};

use crate::logic::stats::MEMBER_COUNT_OFFSET;
use crate::sources::feed::{DEFAULT_FEED_LIMIT, FETCH_TIMEOUT_MS};
use crate::state::SortMode;

/// User-tunable parameters read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Feed base URL; `{feed_url}/posts?limit=N` is requested.
    pub feed_url: String,
    /// Maximum number of records to request.
    pub feed_limit: usize,
    /// Hard budget for the feed request in milliseconds.
    pub fetch_timeout_ms: u64,
    /// Offset added to the distinct-author count for the member counter.
    pub member_count_offset: u64,
    /// Sort mode used when none is given on the command line.
    pub default_sort: SortMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed_url: "https://api.baraza.example".to_owned(),
            feed_limit: DEFAULT_FEED_LIMIT,
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            member_count_offset: MEMBER_COUNT_OFFSET,
            default_sort: SortMode::Latest,
        }
    }
}

/// Contents written to `settings.conf` on first run.
const DEFAULT_SETTINGS_FILE: &str = "\
# Baraza settings
# feed_url = https://api.baraza.example
# feed_limit = 50
# fetch_timeout_ms = 4000
# member_count_offset = 142
# default_sort = latest
";

/// Check if a line should be skipped (empty or comment).
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// Split a `key = value` line, trimming both sides.
fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, '=');
    let key = parts.next()?.trim().to_string();
    let value = parts.next()?.trim().to_string();
    if key.is_empty() { None } else { Some((key, value)) }
}

/// What: Resolve the configuration directory, creating it on demand.
///
/// Output:
/// - `$BARAZA_CONFIG_DIR` when set, else `$XDG_CONFIG_HOME/baraza`, else
///   `~/.config/baraza`. Creation failures are ignored; later file reads
///   simply fall back to defaults.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = env::var("BARAZA_CONFIG_DIR").ok().map_or_else(
        || {
            env::var("XDG_CONFIG_HOME").ok().map_or_else(
                || {
                    let home = env::var("HOME").unwrap_or_else(|_| ".".to_owned());
                    Path::new(&home).join(".config").join("baraza")
                },
                |xdg| Path::new(&xdg).join("baraza"),
            )
        },
        PathBuf::from,
    );
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Directory for log files, under the config directory.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Parse settings text, starting from the defaults.
///
/// Inputs:
/// - `text`: `key = value` lines; comments and unknown keys are ignored,
///   as are values that fail to parse.
#[must_use]
pub fn parse_settings(text: &str) -> Settings {
    let mut settings = Settings::default();
    for line in text.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, value)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "feed_url" => {
                if !value.is_empty() {
                    settings.feed_url = value;
                }
            }
            "feed_limit" => {
                if let Ok(n) = value.parse::<usize>()
                    && n > 0
                {
                    settings.feed_limit = n;
                }
            }
            "fetch_timeout_ms" => {
                if let Ok(n) = value.parse::<u64>()
                    && n > 0
                {
                    settings.fetch_timeout_ms = n;
                }
            }
            "member_count_offset" => {
                if let Ok(n) = value.parse::<u64>() {
                    settings.member_count_offset = n;
                }
            }
            "default_sort" => {
                if let Some(mode) = SortMode::from_key(&value) {
                    settings.default_sort = mode;
                }
            }
            other => {
                tracing::debug!(key = other, "ignoring unknown settings key");
            }
        }
    }
    settings
}

/// What: Load settings from an explicit file path.
///
/// Output:
/// - Parsed settings, or the defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    std::fs::read_to_string(path)
        .map(|text| parse_settings(&text))
        .unwrap_or_default()
}

/// What: Load settings from the resolved config directory.
///
/// Details:
/// - Writes a commented template on first run so the file is
///   discoverable; a write failure is non-fatal.
#[must_use]
pub fn load_settings() -> Settings {
    let path = config_dir().join("settings.conf");
    if !path.is_file() {
        if let Err(e) = std::fs::write(&path, DEFAULT_SETTINGS_FILE) {
            tracing::debug!(error = %e, path = %path.display(), "could not write default settings");
        }
        return Settings::default();
    }
    load_settings_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# comment"));
        assert!(skip_comment_or_empty("// comment"));
        assert!(skip_comment_or_empty("; comment"));
        assert!(!skip_comment_or_empty("feed_limit = 20"));
    }

    #[test]
    fn parse_settings_overrides_only_valid_keys() {
        let text = "\
# local overrides
feed_url = http://127.0.0.1:9000/api
feed_limit = 25
fetch_timeout_ms = nonsense
member_count_offset = 0
default_sort = popular
mystery_key = 9
";
        let s = parse_settings(text);
        assert_eq!(s.feed_url, "http://127.0.0.1:9000/api");
        assert_eq!(s.feed_limit, 25);
        // unparseable value keeps the default
        assert_eq!(s.fetch_timeout_ms, FETCH_TIMEOUT_MS);
        assert_eq!(s.member_count_offset, 0);
        assert_eq!(s.default_sort, SortMode::Popular);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let s = parse_settings("feed_limit = 0\nfetch_timeout_ms = 0\n");
        assert_eq!(s.feed_limit, DEFAULT_FEED_LIMIT);
        assert_eq!(s.fetch_timeout_ms, FETCH_TIMEOUT_MS);
    }

    #[test]
    fn default_template_parses_back_to_defaults() {
        assert_eq!(parse_settings(DEFAULT_SETTINGS_FILE), Settings::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings_from(&dir.path().join("absent.conf"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "default_sort = most-replies\n").expect("write");
        let s = load_settings_from(&path);
        assert_eq!(s.default_sort, SortMode::MostReplies);
    }
}
