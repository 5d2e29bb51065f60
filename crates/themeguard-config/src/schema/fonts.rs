//! Typography overrides.

use serde::{Deserialize, Serialize};

/// Font preset selections. Values are preset names, never raw font-family
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFonts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ThemeFonts {
    /// Present fonts paired with their dotted field path, in validation order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("fonts.title", &self.title), ("fonts.body", &self.body)]
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}
