//! Escaping, formatting, and badge helpers shared by all views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{BioRelevance, Severity};

/// Map `& < > " '` to their named character references.
///
/// Empty input renders as the empty string. Everything interpolated into
/// markup as text must pass through here.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render an ISO-ish date string as `Mon D, YYYY` (en-US month names).
///
/// The server emits RFC 3339, RFC 2822 (Flask's jsonify of datetimes), or
/// plain MySQL `YYYY-MM-DD [HH:MM:SS]`; anything absent or unparseable
/// renders as the literal `N/A`.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a counter with en-US thousands grouping.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Severity badge; records without a severity show `N/A` on the lowest badge
/// style, matching the list and detail views.
pub fn severity_badge(severity: Option<Severity>) -> String {
    let class = severity.map_or("low", Severity::class_suffix);
    let label = severity.map_or_else(|| "N/A".to_string(), |s| s.to_string());
    format!(
        r#"<span class="badge badge-severity-{}">{}</span>"#,
        class,
        escape_html(&label)
    )
}

/// Bio-relevance badge, or a muted `N/A` when the record is unclassified.
pub fn bio_badge(bio: Option<BioRelevance>) -> String {
    match bio {
        Some(bio) => format!(
            r#"<span class="badge badge-bio-{}">{}</span>"#,
            bio.class_suffix(),
            bio
        ),
        None => r#"<span class="text-muted">N/A</span>"#.to_string(),
    }
}
