//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod editor;
mod helpers;
mod layout;


use crate::schema::SplitShellConfig;
use splitshell_common::ConfigError;

use helpers::Violations;

/// Check every section, reporting all violations in one error.
pub fn validate(config: &SplitShellConfig) -> Result<(), ConfigError> {
    let mut violations = Violations::default();
    layout::validate_layout(&mut violations, &config.layout);
    editor::validate_editor(&mut violations, config);
    violations.into_result()
}
