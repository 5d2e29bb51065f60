//! Font preset catalog.

/// Font presets a theme may select.
pub const FONT_PRESETS: &[&str] = &[
    "inter",
    "georgia",
    "playfair",
    "roboto",
    "lora",
    "montserrat",
    "merriweather",
    "source-code-pro",
    "oswald",
    "raleway",
];

/// Check whether `name` is a known preset.
///
/// Case-insensitive, whole-string match. Surrounding whitespace is not trimmed.
pub fn is_valid_font_preset(name: &str) -> bool {
    FONT_PRESETS
        .iter()
        .any(|preset| preset.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_presets() {
        assert_eq!(FONT_PRESETS.len(), 10);
    }

    #[test]
    fn accepts_every_preset() {
        for preset in FONT_PRESETS {
            assert!(is_valid_font_preset(preset), "{preset} should be valid");
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_valid_font_preset("INTER"));
        assert!(is_valid_font_preset("Source-Code-Pro"));
        assert!(is_valid_font_preset("PlayFair"));
    }

    #[test]
    fn rejects_unknown_fonts() {
        assert!(!is_valid_font_preset("Comic Sans"));
        assert!(!is_valid_font_preset("arial"));
        assert!(!is_valid_font_preset(""));
    }

    #[test]
    fn rejects_partial_and_padded_names() {
        assert!(!is_valid_font_preset("int"));
        assert!(!is_valid_font_preset("inter-bold"));
        assert!(!is_valid_font_preset("source-code"));
        assert!(!is_valid_font_preset(" inter"));
        assert!(!is_valid_font_preset("inter "));
    }
}
