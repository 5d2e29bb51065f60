//! Color override validation (background, text, accent, link, title).

use crate::colors::is_valid_hex_color;
use crate::schema::ThemeColors;
use themeguard_common::ValidationError;

pub(crate) fn validate_colors(colors: &ThemeColors) -> Result<(), ValidationError> {
    match colors.entries().find(|(_, value)| !is_valid_hex_color(value)) {
        Some((field, value)) => Err(ValidationError::InvalidHexColor {
            field,
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}
