// Text helpers shared by the list and panel sinks
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Escape untrusted payload text before it is placed into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a service timestamp in local time. Unparsable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
    }

    // The gNB log parser emits naive ISO timestamps
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => match Local.from_local_datetime(&naive).earliest() {
            Some(local) => local.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}
