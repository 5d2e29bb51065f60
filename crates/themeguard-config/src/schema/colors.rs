//! Color palette overrides.

use serde::{Deserialize, Serialize};

/// Hex color overrides (`#RGB` or `#RRGGBB`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ThemeColors {
    /// Present colors paired with their dotted field path, in validation order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("colors.background", &self.background),
            ("colors.text", &self.text),
            ("colors.accent", &self.accent),
            ("colors.link", &self.link),
            ("colors.title", &self.title),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}
