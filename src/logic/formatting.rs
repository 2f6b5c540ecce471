//! Formatting and date logic
//!
//! Pure functions for parsing seed-data timestamps and formatting values
//! for human-readable display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Parse a timestamp as found in document records
///
/// Accepts RFC 3339 ("2024-01-15T10:30:00Z"), "YYYY-MM-DD HH:MM[:SS]",
/// "YYYY-MM-DDTHH:MM:SS" and plain dates ("YYYY-MM-DD", read as midnight UTC).
///
/// # Returns
/// `None` for empty or unparseable input
///
/// # Examples
/// ```
/// use docdeck::logic::formatting::parse_instant;
///
/// assert!(parse_instant("2024-01-15").is_some());
/// assert!(parse_instant("2024-01-15T10:30:00Z").is_some());
/// assert!(parse_instant("last tuesday").is_none());
/// ```
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a record timestamp as "YYYY-MM-DD" (or "YYYY-MM-DD HH:MM" when it
/// carries a time of day). Unparseable values are shown verbatim.
pub fn format_date(value: &str) -> String {
    match parse_instant(value) {
        Some(dt) if dt.format("%H:%M:%S").to_string() != "00:00:00" => {
            dt.format("%Y-%m-%d %H:%M").to_string()
        }
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

/// Truncate text to a display width, appending "…" when cut
///
/// # Examples
/// ```
/// use docdeck::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Quality Manual", 20), "Quality Manual");
/// assert_eq!(truncate_to_width("Quality Manual", 8), "Quality…");
/// ```
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad (or truncate) text to exactly `width` display cells
pub fn fit_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}
