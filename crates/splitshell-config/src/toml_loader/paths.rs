//! Where `config.toml` lives.

use std::path::{Path, PathBuf};

use splitshell_common::ConfigError;

use super::template::default_config_toml;

/// `<config dir>/splitshell/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("splitshell").join("config.toml"))
}

/// Write the commented starter config to `path`, creating its directory.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |target: &Path| {
        let target = target.to_path_buf();
        move |source| ConfigError::Write {
            path: target,
            source,
        }
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_err(dir))?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_err(path))
}
