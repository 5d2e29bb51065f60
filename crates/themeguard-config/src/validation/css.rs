//! Custom CSS validation.

use themeguard_common::ValidationError;

/// Run the sanitizer for its verdict only; the sanitized text is discarded.
pub(crate) fn validate_custom_css(custom_css: &str) -> Result<(), ValidationError> {
    themeguard_css::sanitize_css(custom_css)?;
    Ok(())
}
