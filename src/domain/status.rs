// Status text normalization and severity bucketing
use serde::Serialize;

const SUCCESS_STATES: [&str; 4] = ["running", "connected", "active", "ok"];
const WARNING_STATES: [&str; 3] = ["waiting", "pending", "unknown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Bucket a raw (un-normalized) status. Matching is case-insensitive against closed
    /// sets; an absent or empty status counts as `unknown`.
    pub fn of(raw: Option<&str>) -> Self {
        let status = match raw {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => "unknown".to_string(),
        };

        if SUCCESS_STATES.contains(&status.as_str()) {
            Severity::Success
        } else if WARNING_STATES.contains(&status.as_str()) {
            Severity::Warning
        } else {
            Severity::Danger
        }
    }
}

/// `"not_connected"` -> `"Not Connected"`. Absent or empty yields `"Unknown"`.
pub fn format_status(raw: Option<&str>) -> String {
    format_label(raw, "Unknown")
}

/// Underscores become spaces and the first character of every word is upper-cased.
/// The rest of each word is left as it is.
pub fn format_label(raw: Option<&str>, fallback: &str) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return fallback.to_string();
    };

    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
