//! Profile element visibility toggles.

use serde::{Deserialize, Serialize};

/// Visibility flags. Plain booleans, passed through without validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeToggles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_avatar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_stats: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_follower_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_bio: Option<bool>,
}
