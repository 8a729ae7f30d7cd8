//! Comma-decimal amounts from the export.
//!
//! Values are read the way a leading-number scan reads them: the comma is swapped for a dot,
//! the longest numeric prefix is parsed and anything without a numeric prefix becomes zero.
//! Thousands separators are NOT stripped, so `"1.234,56"` reads as `1.234`.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number pattern")
});

/// Parse a comma-decimal string keeping its sign.
pub fn parse_signed(raw: &str) -> f64 {
    let dotted = raw.trim().replace(',', ".");
    LEADING_NUMBER
        .find(&dotted)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a comma-decimal string and drop its sign.
pub fn normalize(raw: &str) -> f64 {
    parse_signed(raw).abs()
}

/// Fixed two-decimal rendering used for every numeric QIF field.
pub fn format_fixed(value: f64) -> String {
    format!("{value:.2}")
}
