//! Splitshell configuration system.
//!
//! TOML-based configuration for the split layout engine, theme persistence,
//! the editor highlighter, and logging. Every section uses `serde(default)`
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use splitshell_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    EditorConfig, KeyboardPolicy, LayoutConfig, LogLevel, LoggingConfig, SplitShellConfig,
    ThemeConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_default, load_from_path, parse_config};

use splitshell_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<SplitShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SplitShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&SplitShellConfig::default());
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"editor\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&SplitShellConfig::default());
        let parsed: SplitShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme.default_theme, "light");
        assert_eq!(parsed.layout.keyboard_policy, KeyboardPolicy::Symmetric);
        assert_eq!(parsed.editor.keywords.len(), 10);
    }
}
