//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod editor;
mod layout;
mod logging;
mod theme;

pub use editor::*;
pub use layout::*;
pub use logging::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SplitShellConfig {
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: SplitShellConfig = toml::from_str("").unwrap();
        assert!((config.layout.default_min_ratio - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let toml_str = r#"
[layout]
separator_width = 6

[theme]
default_theme = "dark"
"#;
        let config: SplitShellConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.separator_width, 6);
        assert_eq!(config.theme.default_theme, "dark");
        assert_eq!(config.editor.highlight_color, "blue");
    }
}
