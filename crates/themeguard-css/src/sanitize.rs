//! Declaration-level CSS sanitizer.
//!
//! Pipeline, in order:
//! 1. Size guard against [`MAX_CSS_SIZE`].
//! 2. Blocklist scan over the raw, unsplit input.
//! 3. Split on `;`, keep declarations whose property is allowlisted.
//! 4. Rejoin survivors as `a: b; c: d;`.
//!
//! Values are never inspected. Only the property name gates inclusion.

use themeguard_common::SanitizeError;
use tracing::{debug, warn};

use crate::policy::{find_blocked, is_allowed_property, MAX_CSS_SIZE};

/// Sanitized CSS together with how many declarations were kept or dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedCss {
    /// Canonical output, identical to what [`sanitize_css`] returns.
    pub css: String,
    pub kept: usize,
    /// Declarations discarded for lacking a `:` or naming a disallowed property.
    pub dropped: usize,
}

impl SanitizedCss {
    /// True when every non-empty declaration in the input survived.
    pub fn is_lossless(&self) -> bool {
        self.dropped == 0
    }
}

/// Sanitize a custom CSS snippet.
///
/// Returns an empty string (not an error) when no declaration survives.
pub fn sanitize_css(input: &str) -> Result<String, SanitizeError> {
    sanitize_css_report(input).map(|report| report.css)
}

/// Sanitize a custom CSS snippet, also reporting dropped declarations.
pub fn sanitize_css_report(input: &str) -> Result<SanitizedCss, SanitizeError> {
    if input.len() > MAX_CSS_SIZE {
        warn!(size = input.len(), max = MAX_CSS_SIZE, "custom CSS rejected: too large");
        return Err(SanitizeError::TooLarge {
            size: input.len(),
            max: MAX_CSS_SIZE,
        });
    }

    if let Some(pattern) = find_blocked(input) {
        warn!(pattern, "custom CSS rejected: blocked pattern");
        return Err(SanitizeError::Blocked { pattern });
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut dropped = 0usize;

    for declaration in input.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }

        let Some((property, _)) = declaration.split_once(':') else {
            debug!(declaration, "dropping declaration without ':'");
            dropped += 1;
            continue;
        };

        if is_allowed_property(property) {
            kept.push(declaration);
        } else {
            debug!(property = property.trim(), "dropping disallowed property");
            dropped += 1;
        }
    }

    let css = if kept.is_empty() {
        String::new()
    } else {
        format!("{};", kept.join("; "))
    };

    Ok(SanitizedCss {
        css,
        kept: kept.len(),
        dropped,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_blocked(input: &str) {
        assert!(
            matches!(sanitize_css(input), Err(SanitizeError::Blocked { .. })),
            "expected '{input}' to be blocked"
        );
    }

    // --- Size guard ---

    #[test]
    fn accepts_input_at_size_limit() {
        let input = format!("color: red;{}", " ".repeat(MAX_CSS_SIZE - 11));
        assert_eq!(input.len(), MAX_CSS_SIZE);
        assert_eq!(sanitize_css(&input).unwrap(), "color: red;");
    }

    #[test]
    fn rejects_input_over_size_limit() {
        let input = "a".repeat(MAX_CSS_SIZE + 1);
        assert_eq!(
            sanitize_css(&input),
            Err(SanitizeError::TooLarge {
                size: MAX_CSS_SIZE + 1,
                max: MAX_CSS_SIZE,
            })
        );
    }

    #[test]
    fn size_guard_runs_before_blocklist() {
        let input = format!("background-color: url(evil);{}", "x".repeat(MAX_CSS_SIZE));
        assert!(matches!(
            sanitize_css(&input),
            Err(SanitizeError::TooLarge { .. })
        ));
    }

    #[test]
    fn size_is_measured_in_bytes() {
        // 'é' is two bytes in UTF-8
        let input = "é".repeat(MAX_CSS_SIZE / 2 + 1);
        assert!(input.chars().count() < MAX_CSS_SIZE);
        assert!(matches!(
            sanitize_css(&input),
            Err(SanitizeError::TooLarge { .. })
        ));
    }

    // --- Blocklist ---

    #[test]
    fn blocks_every_pattern() {
        assert_blocked("background-color: url(https://evil.com/x.png)");
        assert_blocked("@import 'evil.css'");
        assert_blocked("width: expression(alert(1))");
        assert_blocked("color: javascript:alert(1)");
        assert_blocked("-moz-binding: foo");
        assert_blocked("behavior: url(x.htc)");
        assert_blocked("position: fixed");
        assert_blocked("position: absolute");
    }

    #[test]
    fn blocks_with_internal_whitespace() {
        assert_blocked("background: url  (x)");
        assert_blocked("width: expression\t(1)");
        assert_blocked("behavior   : x");
        assert_blocked("position:fixed");
        assert_blocked("position  :\n  absolute");
    }

    #[test]
    fn blocks_regardless_of_case() {
        assert_blocked("background: URL(x)");
        assert_blocked("color: JavaScript:alert(1)");
        assert_blocked("@IMPORT 'x'");
        assert_blocked("POSITION: FIXED");
        assert_blocked("-MOZ-BINDING: x");
    }

    #[test]
    fn scan_runs_over_raw_input_not_declarations() {
        assert_blocked("color: red; url(x): y;");
        // No ':' after the pattern, so it would never be a declaration
        assert_blocked("color: red; @import");
    }

    #[test]
    fn relative_position_is_allowed_through_scan() {
        // Not blocked, but `position` is not allowlisted so it is dropped
        assert_eq!(
            sanitize_css("position: relative; color: red").unwrap(),
            "color: red;"
        );
    }

    #[test]
    fn blocked_error_names_pattern() {
        assert_eq!(
            sanitize_css("x: 1; @import 'a'"),
            Err(SanitizeError::Blocked { pattern: "@import" })
        );
    }

    // --- Declaration filtering ---

    #[test]
    fn drops_unknown_properties() {
        assert_eq!(
            sanitize_css("color: red; unknown-prop: 1px;").unwrap(),
            "color: red;"
        );
    }

    #[test]
    fn all_dropped_is_empty_success() {
        assert_eq!(sanitize_css("totally-unrecognized: 1;").unwrap(), "");
        assert_eq!(sanitize_css("").unwrap(), "");
        assert_eq!(sanitize_css(" ;; ; ").unwrap(), "");
    }

    #[test]
    fn drops_declarations_without_colon() {
        assert_eq!(
            sanitize_css("color red; margin: 0").unwrap(),
            "margin: 0;"
        );
    }

    #[test]
    fn keeps_original_text_and_casing() {
        assert_eq!(
            sanitize_css("  COLOR :  Red  ;Font-Size:12PX").unwrap(),
            "COLOR :  Red; Font-Size:12PX;"
        );
    }

    #[test]
    fn value_is_not_inspected() {
        // Only the property gates inclusion
        assert_eq!(
            sanitize_css("color: }body{ background: red").unwrap(),
            "color: }body{ background: red;"
        );
    }

    #[test]
    fn only_first_colon_splits_property() {
        assert_eq!(
            sanitize_css("font-family: a:b").unwrap(),
            "font-family: a:b;"
        );
        assert_eq!(sanitize_css("foo: color: red").unwrap(), "");
    }

    #[test]
    fn keeps_every_allowed_property() {
        let input: String = crate::ALLOWED_CSS_PROPERTIES
            .iter()
            .map(|p| format!("{p}: 1;"))
            .collect();
        let report = sanitize_css_report(&input).unwrap();
        assert_eq!(report.kept, 23);
        assert_eq!(report.dropped, 0);
    }

    // --- Reassembly ---

    #[test]
    fn joins_with_semicolon_space_and_trailing_semicolon() {
        assert_eq!(
            sanitize_css("color:red;margin:0;padding:1px").unwrap(),
            "color:red; margin:0; padding:1px;"
        );
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "color: red; unknown: 1; margin : 0 auto ;",
            "  Line-Height: 1.5;;opacity:0.5  ",
            "box-shadow: 0 0 2px #000; nope",
            "totally-unrecognized: 1;",
        ];
        for input in inputs {
            let once = sanitize_css(input).unwrap();
            let twice = sanitize_css(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for '{input}'");
        }
    }

    // --- Report ---

    #[test]
    fn report_counts_kept_and_dropped() {
        let report = sanitize_css_report("color: red; bogus: 1; no colon; margin: 0").unwrap();
        assert_eq!(report.css, "color: red; margin: 0;");
        assert_eq!(report.kept, 2);
        assert_eq!(report.dropped, 2);
        assert!(!report.is_lossless());
    }

    #[test]
    fn report_lossless_when_nothing_dropped() {
        let report = sanitize_css_report("color: red;").unwrap();
        assert!(report.is_lossless());
        assert_eq!(report, SanitizedCss {
            css: "color: red;".into(),
            kept: 1,
            dropped: 0,
        });
    }

    #[test]
    fn report_propagates_rejections() {
        assert!(matches!(
            sanitize_css_report("url(x)"),
            Err(SanitizeError::Blocked { .. })
        ));
    }
}
