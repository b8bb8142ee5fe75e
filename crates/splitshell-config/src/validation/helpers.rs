//! Violation collector shared by the section validators.

use std::fmt::Display;

use splitshell_common::ConfigError;

/// Constraint violations found so far, one `field: problem` line each.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
    /// `lo <= value <= hi`. Unordered values such as NaN always violate.
    pub(crate) fn bounded<T: PartialOrd + Display>(&mut self, field: &str, value: T, lo: T, hi: T) {
        let inside = lo <= value && value <= hi;
        if !inside {
            self.0.push(format!("{field}: {value} is not within {lo}..={hi}"));
        }
    }

    pub(crate) fn non_empty(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.0.push(format!("{field}: must not be empty"));
        }
    }

    /// Record `problem` under `field` unless `holds`.
    pub(crate) fn check(&mut self, holds: bool, field: &str, problem: impl Display) {
        if !holds {
            self.0.push(format!("{field}: {problem}"));
        }
    }

    pub(crate) fn into_result(self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(self.0.join("; ")))
        }
    }
}
