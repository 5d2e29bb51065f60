//! Custom CSS sanitization for user-supplied theme snippets.
//!
//! Input is a flat list of `property: value` declarations separated by `;`.
//! Anything over the size ceiling or matching a blocklist pattern is rejected
//! outright; otherwise declarations are filtered down to an allowlist of
//! properties and reassembled into a canonical string.

mod policy;
mod sanitize;

pub use policy::{
    is_allowed_property, ALLOWED_CSS_PROPERTIES, BLOCKED_CSS_PATTERNS, MAX_CSS_SIZE,
};
pub use sanitize::{sanitize_css, sanitize_css_report, SanitizedCss};
