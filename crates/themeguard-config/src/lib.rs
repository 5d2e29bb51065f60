//! Theme settings model and validation.
//!
//! Validates user-supplied theme configuration (font presets, hex colors,
//! custom CSS) before it is persisted or rendered. Absent fields mean "no
//! change requested" and are always valid.
//!
//! # Quick Start
//!
//! ```rust
//! use themeguard_config::{validate, ThemeFonts, ThemeSettings};
//!
//! let settings = ThemeSettings {
//!     fonts: Some(ThemeFonts {
//!         title: Some("Inter".into()),
//!         body: None,
//!     }),
//!     custom_css: Some("color: red; position: relative".into()),
//!     ..Default::default()
//! };
//!
//! validate(Some(&settings)).expect("settings should be valid");
//! assert_eq!(
//!     settings.sanitized_custom_css().unwrap().as_deref(),
//!     Some("color: red;")
//! );
//! ```

pub mod colors;
pub mod fonts;
pub mod loader;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use colors::is_valid_hex_color;
pub use fonts::{is_valid_font_preset, FONT_PRESETS};
pub use loader::{load_from_path, parse_settings, SettingsFormat};
pub use schema::{ThemeColors, ThemeFonts, ThemeSettings, ThemeToggles};
pub use themeguard_css::{sanitize_css, sanitize_css_report, SanitizedCss, MAX_CSS_SIZE};
pub use validation::validate;

use themeguard_common::ValidationError;

/// Gate theme settings before persistence. Alias for [`validate`].
pub fn validate_theme_settings(settings: Option<&ThemeSettings>) -> Result<(), ValidationError> {
    validate(settings)
}
