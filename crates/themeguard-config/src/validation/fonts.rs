//! Font preset validation (title, body).

use crate::fonts::is_valid_font_preset;
use crate::schema::ThemeFonts;
use themeguard_common::ValidationError;

pub(crate) fn validate_fonts(fonts: &ThemeFonts) -> Result<(), ValidationError> {
    match fonts.entries().find(|(_, name)| !is_valid_font_preset(name)) {
        Some((field, name)) => Err(ValidationError::InvalidFontPreset {
            field,
            value: name.to_string(),
        }),
        None => Ok(()),
    }
}
