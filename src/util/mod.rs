//! Small utility helpers for JSON extraction, text budgets, and time
//! formatting.
//!
//! The functions in this module are intentionally lightweight; they back the
//! defensive normalization boundary in `sources` and the log timer in `main`.

use serde_json::Value;

/// What: Extract a string value from a JSON object by key, defaulting to
/// empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - The string value if found, or `""` if the key is missing or not a
///   string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract the first available string from a list of candidate keys.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - `Some(String)` for the first key mapping to a JSON string; `None` when
///   none match.
#[must_use]
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(|x| x.as_str()) {
            return Some(s.to_owned());
        }
    }
    None
}

/// What: Extract an array of strings from a JSON object by trying keys in
/// order.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - The first found array as `Vec<String>`, non-string elements filtered
///   out; empty vector when no key holds an array.
#[must_use]
pub fn arrs(v: &Value, keys: &[&str]) -> Vec<String> {
    for k in keys {
        if let Some(arr) = v.get(*k).and_then(|x| x.as_array()) {
            return arr
                .iter()
                .filter_map(|e| e.as_str().map(ToOwned::to_owned))
                .collect();
        }
    }
    Vec::new()
}

/// What: Extract an unsigned 64-bit integer by trying multiple keys and
/// representations.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - `Some(u64)` for the first key holding a JSON `u64`, a non-negative
///   `i64`, or a string that parses as `u64`; `None` otherwise.
#[must_use]
pub fn u64_of(v: &Value, keys: &[&str]) -> Option<u64> {
    for k in keys {
        if let Some(n) = v.get(*k) {
            if let Some(u) = n.as_u64() {
                return Some(u);
            }
            if let Some(i) = n.as_i64()
                && let Ok(u) = u64::try_from(i)
            {
                return Some(u);
            }
            if let Some(s) = n.as_str()
                && let Ok(p) = s.parse::<u64>()
            {
                return Some(p);
            }
        }
    }
    None
}

/// What: Extract a boolean by trying multiple keys and lenient
/// representations.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - The first usable value: a JSON bool, the strings `"true"`/`"false"`
///   (case-insensitive), or a 0/1 number. `false` when nothing matches.
#[must_use]
pub fn bool_of(v: &Value, keys: &[&str]) -> bool {
    for k in keys {
        if let Some(n) = v.get(*k) {
            if let Some(b) = n.as_bool() {
                return b;
            }
            if let Some(s) = n.as_str() {
                if s.eq_ignore_ascii_case("true") {
                    return true;
                }
                if s.eq_ignore_ascii_case("false") {
                    return false;
                }
            }
            if let Some(i) = n.as_i64() {
                return i != 0;
            }
        }
    }
    false
}

/// What: Truncate a string to at most `max` characters, on a char boundary.
///
/// Inputs:
/// - `input`: Source text.
/// - `max`: Character budget.
///
/// Output:
/// - A newly allocated string holding the first `max` characters (not
///   bytes), whitespace-trimmed at both ends.
#[must_use]
pub fn truncate_chars(input: &str, max: usize) -> String {
    let trimmed = input.trim();
    match trimmed.char_indices().nth(max) {
        Some((byte_idx, _)) => trimmed[..byte_idx].trim_end().to_owned(),
        None => trimmed.to_owned(),
    }
}

/// What: Format epoch seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Inputs:
/// - `ts`: Optional seconds since the Unix epoch.
///
/// Output:
/// - Empty string for `None`, the raw number for out-of-range values, the
///   formatted date otherwise.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0).map_or_else(|| t.to_string(), |d| {
        d.format("%Y-%m-%d %H:%M:%S").to_string()
    })
}
