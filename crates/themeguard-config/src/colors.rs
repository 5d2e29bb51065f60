//! Hex color validation for theme color overrides.
//!
//! Accepts `#RGB` and `#RRGGBB`, with the leading `#` optional. Alpha
//! forms (`#RGBA`, `#RRGGBBAA`) are rejected.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: optional single `#`, then 3 or 6 hex digits.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Check that `value` is a `#RGB` or `#RRGGBB` color.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_RE.is_match(value)
}
