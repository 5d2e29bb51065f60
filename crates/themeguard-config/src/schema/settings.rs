//! Root theme settings.

use serde::{Deserialize, Serialize};
use themeguard_common::{SanitizeError, ValidationError};

use super::{ThemeColors, ThemeFonts, ThemeToggles};

/// User-customizable theme configuration.
///
/// Built from an incoming request, validated once, then either persisted or
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<ThemeFonts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggles: Option<ThemeToggles>,
    /// Raw author-supplied declarations, e.g. `color: red; margin: 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

impl ThemeSettings {
    /// True when no section is present.
    pub fn is_empty(&self) -> bool {
        self.colors.is_none()
            && self.fonts.is_none()
            && self.toggles.is_none()
            && self.custom_css.is_none()
    }

    /// Validate these settings. See [`crate::validation::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validation::validate(Some(self))
    }

    /// Recompute the canonical sanitized CSS to persist.
    ///
    /// Validation only reports pass/fail, so callers storing the settings
    /// use this to obtain the cleaned text.
    pub fn sanitized_custom_css(&self) -> Result<Option<String>, SanitizeError> {
        self.custom_css
            .as_deref()
            .map(themeguard_css::sanitize_css)
            .transpose()
    }
}
