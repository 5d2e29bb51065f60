use std::path::PathBuf;

/// Rejection raised by the custom CSS sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("CSS exceeds maximum size (10KB): got {size} bytes, limit is {max}")]
    TooLarge { size: usize, max: usize },

    #[error("CSS contains blocked patterns")]
    Blocked {
        /// First blocklist pattern that matched the raw input.
        pattern: &'static str,
    },
}

impl SanitizeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => "css_too_large",
            Self::Blocked { .. } => "css_blocked",
        }
    }
}

/// Rejection raised by theme settings validation.
///
/// Only the first offending field is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid font preset for {field}: '{value}'")]
    InvalidFontPreset { field: &'static str, value: String },

    #[error("invalid hex color format for {field}: '{value}'")]
    InvalidHexColor { field: &'static str, value: String },

    #[error(transparent)]
    Css(#[from] SanitizeError),
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFontPreset { .. } => "invalid_font_preset",
            Self::InvalidHexColor { .. } => "invalid_hex_color",
            Self::Css(e) => e.code(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("settings parse error: {0}")]
    ParseError(String),

    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeGuardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Sanitize(#[from] SanitizeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
