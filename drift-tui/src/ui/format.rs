//! Text formatting helpers shared across screens.

use chrono::{DateTime, Duration, Utc};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner glyph for a tick counter.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Relative timestamp: "now", "5m", "3h", "2d", then a short date.
pub fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);

    if delta < Duration::minutes(1) {
        "now".to_string()
    } else if delta < Duration::hours(1) {
        format!("{}m", delta.num_minutes())
    } else if delta < Duration::days(1) {
        format!("{}h", delta.num_hours())
    } else if delta < Duration::days(7) {
        format!("{}d", delta.num_days())
    } else {
        then.format("%b %-d").to_string()
    }
}

/// Shorten to at most `max` characters, ellipsized.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let cut: String = s.chars().take(max - 3).collect();
    format!("{}...", cut)
}

/// Flatten lightweight markup for single-line previews.
pub fn strip_markup(s: &str) -> String {
    s.replace("**", "")
        .replace("__", "")
        .replace(['*', '_', '`', '#'], "")
        .replace('\n', " ")
        .trim()
        .to_string()
}

/// Topics as a "#a #b #c" tag string, empty when there are none.
pub fn format_topics(topics: &[String]) -> String {
    if topics.is_empty() {
        return String::new();
    }
    format!("#{}", topics.join(" #"))
}
