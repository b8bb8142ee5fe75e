//! Panel declarations and their resolved form.

use serde::{Deserialize, Serialize};
use splitshell_common::LayoutError;
use splitshell_config::LayoutConfig;

/// Caller-supplied panel declaration. Missing bounds take the configured
/// defaults when the layout is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    #[serde(default)]
    pub min_ratio: Option<f64>,
    #[serde(default)]
    pub max_ratio: Option<f64>,
}

impl PanelConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            min_ratio: None,
            max_ratio: None,
        }
    }

    pub fn with_bounds(id: impl Into<String>, min_ratio: f64, max_ratio: f64) -> Self {
        Self {
            id: id.into(),
            min_ratio: Some(min_ratio),
            max_ratio: Some(max_ratio),
        }
    }
}

/// A panel with its bounds fixed for the lifetime of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPanel {
    pub id: String,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl ResolvedPanel {
    pub fn clamp(&self, ratio: f64) -> f64 {
        ratio.clamp(self.min_ratio, self.max_ratio)
    }
}

/// Apply defaults and check every declaration.
///
/// Fails on fewer than two panels, duplicate ids, or bounds outside
/// `0 <= min <= max <= 1`.
pub fn resolve_panels(
    panels: &[PanelConfig],
    config: &LayoutConfig,
) -> Result<Vec<ResolvedPanel>, LayoutError> {
    if panels.len() < 2 {
        return Err(LayoutError::TooFewPanels(panels.len()));
    }

    let mut resolved: Vec<ResolvedPanel> = Vec::with_capacity(panels.len());
    for panel in panels {
        if resolved.iter().any(|p| p.id == panel.id) {
            return Err(LayoutError::DuplicatePanelId(panel.id.clone()));
        }
        let min = panel.min_ratio.unwrap_or(config.default_min_ratio);
        let max = panel.max_ratio.unwrap_or(config.default_max_ratio);
        let valid = min.is_finite() && max.is_finite() && 0.0 <= min && min <= max && max <= 1.0;
        if !valid {
            return Err(LayoutError::InvalidPanelBounds {
                id: panel.id.clone(),
                min,
                max,
            });
        }
        resolved.push(ResolvedPanel {
            id: panel.id.clone(),
            min_ratio: min,
            max_ratio: max,
        });
    }
    Ok(resolved)
}

/// CSS class suffix for a panel id: ASCII alphanumerics, `-` and `_` kept,
/// everything else replaced with `-`.
pub fn class_suffix(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_bounds() {
        let panels = vec![
            PanelConfig::new("editor"),
            PanelConfig {
                id: "preview".into(),
                min_ratio: Some(0.2),
                max_ratio: None,
            },
        ];
        let resolved = resolve_panels(&panels, &LayoutConfig::default()).unwrap();
        assert_eq!(resolved[0].min_ratio, 0.1);
        assert_eq!(resolved[0].max_ratio, 0.8);
        assert_eq!(resolved[1].min_ratio, 0.2);
        assert_eq!(resolved[1].max_ratio, 0.8);
    }

    #[test]
    fn single_panel_is_rejected() {
        let err = resolve_panels(&[PanelConfig::new("only")], &LayoutConfig::default());
        assert_eq!(err.unwrap_err(), LayoutError::TooFewPanels(1));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let panels = vec![PanelConfig::new("a"), PanelConfig::new("a")];
        let err = resolve_panels(&panels, &LayoutConfig::default()).unwrap_err();
        assert_eq!(err, LayoutError::DuplicatePanelId("a".into()));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let panels = vec![
            PanelConfig::with_bounds("a", 0.6, 0.4),
            PanelConfig::new("b"),
        ];
        let err = resolve_panels(&panels, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidPanelBounds { ref id, .. } if id == "a"));
    }

    #[test]
    fn out_of_unit_bounds_are_rejected() {
        let panels = vec![PanelConfig::with_bounds("a", 0.0, 1.5), PanelConfig::new("b")];
        assert!(resolve_panels(&panels, &LayoutConfig::default()).is_err());
        let panels = vec![
            PanelConfig::with_bounds("a", f64::NAN, 0.5),
            PanelConfig::new("b"),
        ];
        assert!(resolve_panels(&panels, &LayoutConfig::default()).is_err());
    }

    #[test]
    fn panel_config_deserializes_without_bounds() {
        let panel: PanelConfig = serde_json::from_str(r#"{"id":"tree"}"#).unwrap();
        assert_eq!(panel, PanelConfig::new("tree"));
    }

    #[test]
    fn class_suffix_sanitizes() {
        assert_eq!(class_suffix("editor"), "editor");
        assert_eq!(class_suffix("ast view.json"), "ast-view-json");
    }
}
