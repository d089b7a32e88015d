//! Page rendering: typed context in, HTML markup out.

pub mod dashboard;
pub mod exercise;
pub mod meal;
pub mod report;
pub mod sleep;
pub mod water;

mod layout;

pub(crate) use layout::page;

use chrono::{DateTime, Utc};

/// Escape text for interpolation into HTML content or attribute values.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn fmt_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Value format for `<input type="datetime-local">`.
pub(crate) fn input_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M").to_string()
}

/// Optional integers render as "-" when not recorded; a recorded zero stays 0.
pub(crate) fn fmt_opt(value: Option<i64>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}

/// Attribute value for optional number inputs: empty when not recorded.
pub(crate) fn input_opt(value: Option<i64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}
