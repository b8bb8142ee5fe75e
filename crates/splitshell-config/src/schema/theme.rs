//! Theme persistence configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme applied when nothing has been stored yet.
    pub default_theme: String,
    /// Key-value store entry holding the selected theme.
    pub storage_key: String,
    /// Attribute set on the document element.
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: "light".into(),
            storage_key: "theme".into(),
            attribute: "data-theme".into(),
        }
    }
}
