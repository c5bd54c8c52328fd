use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]+$").unwrap());
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

/// Replace whitespace-only lines with empty lines and strip trailing
/// horizontal whitespace everywhere. Idempotent by construction.
pub fn apply(content: &str) -> String {
    let content = BLANK_LINE_WHITESPACE.replace_all(content, "");
    TRAILING_WHITESPACE.replace_all(&content, "").into_owned()
}
