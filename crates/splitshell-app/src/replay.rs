//! Scripted headless runs of the layout engine.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use splitshell_common::ShellError;
use splitshell_config::LayoutConfig;
use splitshell_layout::{
    EventResponse, HeadlessDocument, KeyValueStore, LayoutEvent, PanelConfig, SplitLayout,
};
use tracing::{debug, info};

fn default_container() -> String {
    "split".into()
}

/// A replay script:
///
/// ```json
/// {
///   "container": "ast-container",
///   "width": 804,
///   "panels": [{"id": "editor"}, {"id": "preview", "min_ratio": 0.2}],
///   "events": [
///     {"type": "pointer_down", "separator": 0},
///     {"type": "pointer_move", "client_x": 242},
///     {"type": "pointer_up"}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default = "default_container")]
    pub container: String,
    pub width: f64,
    pub panels: Vec<PanelConfig>,
    #[serde(default)]
    pub events: Vec<LayoutEvent>,
}

impl ReplayScript {
    pub fn load(path: &Path) -> Result<Self, ShellError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ShellError::Other(format!("invalid replay script {}: {e}", path.display()))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelReport {
    pub id: String,
    pub ratio: f64,
    pub width: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub panels: Vec<PanelReport>,
    /// Events the engine acted on.
    pub handled: usize,
    /// Events whose browser default would have been prevented.
    pub prevented: usize,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for panel in &self.panels {
            writeln!(
                f,
                "{:<16} {:>7.4} {:>8}",
                panel.id,
                panel.ratio,
                panel.width.as_deref().unwrap_or("-")
            )?;
        }
        write!(f, "events handled: {}, prevented: {}", self.handled, self.prevented)
    }
}

/// Run `script` against a fresh headless document, flushing frames after
/// construction and after every event.
pub fn run<S: KeyValueStore>(
    script: &ReplayScript,
    store: S,
    config: &LayoutConfig,
) -> Result<ReplayReport, ShellError> {
    let doc = HeadlessDocument::new();
    doc.create_container(&script.container, script.width);
    let mut layout = SplitLayout::new(doc.clone(), store, &script.container, &script.panels, config)?;
    flush(&doc, &mut layout);

    let mut handled = 0;
    let mut prevented = 0;
    for event in &script.events {
        let EventResponse {
            handled: acted,
            prevent_default,
        } = layout.handle(event.clone());
        debug!("replayed {event:?}: handled={acted} prevented={prevent_default}");
        handled += usize::from(acted);
        prevented += usize::from(prevent_default);
        flush(&doc, &mut layout);
    }

    let rendered = layout.rendered_ratios();
    let panels: Vec<PanelReport> = layout
        .panels()
        .iter()
        .zip(rendered)
        .map(|(panel, ratio)| PanelReport {
            id: panel.id.clone(),
            ratio,
            width: layout.panel(&panel.id).and_then(|node| doc.style(node, "width")),
        })
        .collect();
    layout.dispose();

    info!(
        container = script.container.as_str(),
        events = script.events.len(),
        "replay finished"
    );
    Ok(ReplayReport {
        panels,
        handled,
        prevented,
    })
}

fn flush<S: KeyValueStore>(doc: &HeadlessDocument, layout: &mut SplitLayout<HeadlessDocument, S>) {
    for handle in doc.take_frames() {
        layout.on_animation_frame(handle);
    }
}
