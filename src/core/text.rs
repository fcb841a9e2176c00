//! Small text-coercion helpers shared by the scraping strategies.

use std::sync::LazyLock;

use regex::Regex;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern"));

/// First run of decimal digits in `text`, parsed as an integer.
///
/// Surrounding non-digit text is ignored, so labels like `"Fully Solved (123)"`
/// yield `123`.
pub(crate) fn first_uint(text: &str) -> Option<u64> {
    DIGITS.find(text).and_then(|m| m.as_str().parse().ok())
}

/// The token with its first character dropped (`"#42"` -> `"42"`,
/// `"(1234.5"` -> `"1234.5"`).
pub(crate) fn strip_lead(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.as_str()
}
