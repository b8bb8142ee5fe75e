//! Reading `config.toml`.

use std::io::ErrorKind;
use std::path::Path;

use splitshell_common::ConfigError;
use tracing::{debug, info};

use super::paths::{create_default_config, default_config_path};
use crate::schema::SplitShellConfig;

/// Parse config text. Absent sections and keys take their defaults.
pub fn parse_config(text: &str) -> Result<SplitShellConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError(e.message().to_string()))
}

/// Read and parse the config at `path`. Range checks are left to
/// [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<SplitShellConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!("{}: {e}", path.display())))
        }
    };

    let config = parse_config(&text).map_err(|e| match e {
        ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    debug!(path = %path.display(), "config read");
    Ok(config)
}

/// Config from the platform location. The first run writes the commented
/// starter file there and uses the built-in values.
pub fn load_default() -> Result<SplitShellConfig, ConfigError> {
    let path = default_config_path()?;
    if !path.exists() {
        create_default_config(&path)?;
        info!("wrote starter config to {}", path.display());
        return Ok(SplitShellConfig::default());
    }
    load_from_path(&path)
}
