//! Timestamp display helpers for the snapshot `last_update` field.
//!
//! The deployment runs in a fixed UTC+05:00 zone, so wall-clock output uses
//! that offset regardless of the browser's locale. Inputs that do not parse
//! are echoed back unchanged.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, Utc};

const DISPLAY_OFFSET_SECS: i32 = 5 * 3600;

fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse RFC 3339, or a naive ISO timestamp taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `HH:MM:SS` in the display zone.
pub fn format_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |ts| ts.with_timezone(&display_offset()).format("%H:%M:%S").to_string(),
    )
}

/// `DD.MM.YYYY, HH:MM:SS` in the display zone.
pub fn format_local_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |ts| ts.with_timezone(&display_offset()).format("%d.%m.%Y, %H:%M:%S").to_string(),
    )
}

/// Coarse age of `raw` relative to `now`.
pub fn relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let elapsed = now.signed_duration_since(ts).max(TimeDelta::zero());
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} h ago");
    }
    format!("{} d ago", elapsed.num_days())
}

/// Today's date in the display zone.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&display_offset()).date_naive()
}
