use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Deserialize;

use crate::stats::DateRange;

pub type TemplateValues = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Replaces each `{{KEY}}` in one pass. Unknown keys stay as written and
/// substituted text is never rescanned.
pub fn render_template(template: &str, values: &TemplateValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after_open[..close];
        match values.get(key.trim()) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `Jan 1 - Jan 9, 2024`, or with both years when they differ. `-` for no data.
pub fn format_range(range: Option<DateRange>) -> String {
    match range {
        None => "-".to_string(),
        Some(DateRange { start, end }) if start.year() == end.year() => {
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
        }
        Some(DateRange { start, end }) => {
            format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
        }
    }
}

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
