//! Split layout engine configuration types.

use serde::{Deserialize, Serialize};

/// How an arrow-key step treats the panel on the far side of the separator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardPolicy {
    /// Both adjacent panels respect their bounds; the step is cut short at
    /// whichever bound is reached first.
    #[default]
    Symmetric,
    /// Only the shrinking panel is floored at its minimum; the growing panel
    /// absorbs the delta unclamped.
    Asymmetric,
}

/// Split layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lower ratio bound for panels that do not declare one (0.0-1.0).
    pub default_min_ratio: f64,
    /// Upper ratio bound for panels that do not declare one (0.0-1.0).
    pub default_max_ratio: f64,
    /// Ratio change per arrow key press (valid range: 0.001-0.5).
    pub small_step: f64,
    /// Ratio change per shift+arrow key press (valid range: 0.001-0.5).
    pub large_step: f64,
    /// Minimum ratio change a drag must produce to re-render (0.0-0.05).
    pub drag_epsilon: f64,
    /// Separator width in pixels (valid range: 0-32).
    pub separator_width: u32,
    pub keyboard_policy: KeyboardPolicy,
    /// Prefix joined with the container id to form the persistence key.
    pub storage_key_prefix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_min_ratio: 0.1,
            default_max_ratio: 0.8,
            small_step: 0.01,
            large_step: 0.1,
            drag_epsilon: 0.001,
            separator_width: 4,
            keyboard_policy: KeyboardPolicy::Symmetric,
            storage_key_prefix: "split-layout:".into(),
        }
    }
}

impl LayoutConfig {
    /// Persistence key for the layout hosted in `container_id`.
    pub fn storage_key(&self, container_id: &str) -> String {
        format!("{}{container_id}", self.storage_key_prefix)
    }
}
