// Markup helpers for error bodies
// Author: Gabriel Demetrios Lafis

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// Remove HTML tags from an error body, keeping its text
pub fn strip_tags(body: &str) -> String {
    let text = TAG.replace_all(body, "");
    BLANK_LINES.replace_all(&text, "\n").trim().to_string()
}
