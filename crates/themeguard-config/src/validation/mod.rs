//! Theme settings validation.
//!
//! Sections are checked in a fixed order (fonts, colors, custom CSS) and the
//! first failure is returned immediately. The order decides which error
//! surfaces when several sections are invalid at once.

mod colors;
mod css;
mod fonts;


use crate::schema::ThemeSettings;
use themeguard_common::ValidationError;
use tracing::debug;

/// Validate theme settings, stopping at the first invalid field.
///
/// `None` and absent sections are trivially valid. `toggles` is not checked.
pub fn validate(settings: Option<&ThemeSettings>) -> Result<(), ValidationError> {
    let Some(settings) = settings else {
        return Ok(());
    };

    if let Some(ref theme_fonts) = settings.fonts {
        debug!(section = "fonts", "validating");
        fonts::validate_fonts(theme_fonts)?;
    }

    if let Some(ref theme_colors) = settings.colors {
        debug!(section = "colors", "validating");
        colors::validate_colors(theme_colors)?;
    }

    if let Some(ref custom_css) = settings.custom_css {
        debug!(section = "custom_css", "validating");
        css::validate_custom_css(custom_css)?;
    }

    debug!("theme settings validated");
    Ok(())
}
