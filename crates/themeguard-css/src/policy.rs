//! Fixed sanitizer policy: size ceiling, blocklist patterns, and the
//! property allowlist.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum accepted custom CSS size in bytes (10KB).
pub const MAX_CSS_SIZE: usize = 10 * 1024;

/// Patterns whose presence anywhere in the raw input rejects it.
///
/// Listed in scan order. Matching is case-insensitive.
pub const BLOCKED_CSS_PATTERNS: &[&str] = &[
    r"url\s*\(",
    r"@import",
    r"expression\s*\(",
    r"javascript:",
    r"-moz-binding",
    r"behavior\s*:",
    r"position\s*:\s*(fixed|absolute)",
];

/// Properties allowed to survive sanitization.
pub const ALLOWED_CSS_PROPERTIES: &[&str] = &[
    "background-color",
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "text-align",
    "text-decoration",
    "line-height",
    "letter-spacing",
    "border-color",
    "border-radius",
    "padding",
    "padding-top",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "margin",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "opacity",
    "box-shadow",
];

/// Compiled blocklist, paired with the source pattern for diagnostics.
pub(crate) static BLOCKED_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    BLOCKED_CSS_PATTERNS
        .iter()
        .map(|&pattern| (pattern, Regex::new(&format!("(?i){pattern}")).unwrap()))
        .collect()
});

/// Return the first blocklist pattern that matches `input`, if any.
pub(crate) fn find_blocked(input: &str) -> Option<&'static str> {
    BLOCKED_RES
        .iter()
        .find(|(_, re)| re.is_match(input))
        .map(|(pattern, _)| *pattern)
}

/// Check a property name against the allowlist.
///
/// The name is trimmed and lowercased before lookup.
pub fn is_allowed_property(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    ALLOWED_CSS_PROPERTIES.contains(&name.as_str())
}
