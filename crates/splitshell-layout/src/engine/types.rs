//! Engine state, construction and queries.

use splitshell_common::LayoutError;
use splitshell_config::LayoutConfig;
use tracing::{debug, info};

use crate::host::{FrameHandle, Host, ListenerId, ListenerKind, ListenerTarget, NodeId, ObserverId};
use crate::machine::DragMachine;
use crate::panel::{class_suffix, resolve_panels, PanelConfig, ResolvedPanel};
use crate::ratios::{equal_split, normalize, percent};
use crate::store::{load_ratios, save_ratios, KeyValueStore};

/// N panels and N-1 separators in one row of a host container.
///
/// Ratios change only through drags, keyboard steps, [`set_ratios`] and
/// [`set_panel_hidden`]; each change is painted on the next animation frame
/// the host delivers to [`on_animation_frame`].
///
/// [`set_ratios`]: SplitLayout::set_ratios
/// [`set_panel_hidden`]: SplitLayout::set_panel_hidden
/// [`on_animation_frame`]: SplitLayout::on_animation_frame
pub struct SplitLayout<H: Host, S: KeyValueStore> {
    pub(super) host: H,
    pub(super) store: S,
    pub(super) config: LayoutConfig,
    pub(super) container_id: String,
    pub(super) storage_key: String,
    pub(super) container: NodeId,
    pub(super) panels: Vec<ResolvedPanel>,
    pub(super) panel_nodes: Vec<NodeId>,
    pub(super) separator_nodes: Vec<NodeId>,
    /// Raw ratios as last committed; normalized only when rendered.
    pub(super) ratios: Vec<f64>,
    pub(super) hidden: Vec<bool>,
    /// Panel track width in pixels (container minus visible separators).
    pub(super) container_width: f64,
    pub(super) machine: DragMachine,
    pub(super) pending_frame: Option<FrameHandle>,
    pub(super) needs_measure: bool,
    pub(super) static_listeners: Vec<ListenerId>,
    pub(super) drag_listeners: Vec<ListenerId>,
    pub(super) observer: Option<ObserverId>,
    pub(super) disposed: bool,
}

impl<H: Host, S: KeyValueStore> SplitLayout<H, S> {
    /// Build the panels inside the element with id `container_id`.
    ///
    /// Fails before touching the document if there are fewer than two
    /// panels, a panel declaration is invalid, or the container does not
    /// exist. Ratios start at `1/N`, replaced by the persisted vector for
    /// this container when one of the right length is stored.
    pub fn new(
        mut host: H,
        store: S,
        container_id: &str,
        panels: &[PanelConfig],
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        let panels = resolve_panels(panels, config)?;
        let container = host
            .element_by_id(container_id)
            .ok_or_else(|| LayoutError::ContainerNotFound(container_id.to_string()))?;

        let n = panels.len();
        let storage_key = config.storage_key(container_id);
        let ratios = match load_ratios(&store, &storage_key, n) {
            Some(saved) => {
                debug!("restored layout '{storage_key}': {saved:?}");
                saved
            }
            None => equal_split(n),
        };

        let (panel_nodes, separator_nodes) = build_dom(&mut host, container, &panels, config);

        let mut layout = Self {
            host,
            store,
            config: config.clone(),
            container_id: container_id.to_string(),
            storage_key,
            container,
            panels,
            panel_nodes,
            separator_nodes,
            ratios,
            hidden: vec![false; n],
            container_width: 0.0,
            machine: DragMachine::new(),
            pending_frame: None,
            needs_measure: true,
            static_listeners: Vec::new(),
            drag_listeners: Vec::new(),
            observer: None,
            disposed: false,
        };
        let rendered = layout.rendered_ratios();
        layout.update_separator_aria(&rendered);
        layout.subscribe();
        layout.schedule_render();

        info!(
            container = container_id,
            panels = n,
            "split layout created"
        );
        Ok(layout)
    }

    fn subscribe(&mut self) {
        for &sep in &self.separator_nodes {
            for kind in [
                ListenerKind::PointerDown,
                ListenerKind::TouchStart,
                ListenerKind::KeyDown,
            ] {
                let id = self.host.add_listener(ListenerTarget::Element(sep), kind);
                self.static_listeners.push(id);
            }
        }
        let id = self
            .host
            .add_listener(ListenerTarget::Window, ListenerKind::Resize);
        self.static_listeners.push(id);
        self.observer = Some(self.host.observe_resize(self.container));
    }

    // -- Queries --

    /// The host container element.
    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// The element for panel `id`, or `None` for an unknown id.
    pub fn panel(&self, id: &str) -> Option<NodeId> {
        self.index_of(id).map(|i| self.panel_nodes[i])
    }

    pub fn separator(&self, index: usize) -> Option<NodeId> {
        self.separator_nodes.get(index).copied()
    }

    pub fn panel_ids(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn panels(&self) -> &[ResolvedPanel] {
        &self.panels
    }

    /// Committed ratios, before render-time normalization.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Ratios as they are (or will next be) painted.
    pub fn rendered_ratios(&self) -> Vec<f64> {
        normalize(&self.ratios, &self.panels, &self.hidden)
    }

    /// Last measured panel track width; 0 until the first measurement.
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn dragging_index(&self) -> Option<usize> {
        self.machine.dragging_index()
    }

    pub fn is_hidden(&self, id: &str) -> Option<bool> {
        self.index_of(id).map(|i| self.hidden[i])
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Whether a render is scheduled and not yet painted.
    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // -- Commands --

    /// Replace all ratios. The vector is normalized at render time, not here.
    pub fn set_ratios(&mut self, ratios: &[f64]) -> Result<(), LayoutError> {
        if self.disposed {
            return Err(LayoutError::Disposed);
        }
        if ratios.len() != self.panels.len() {
            return Err(LayoutError::RatioCountMismatch {
                expected: self.panels.len(),
                actual: ratios.len(),
            });
        }
        if let Some((index, &value)) = ratios
            .iter()
            .enumerate()
            .find(|(_, r)| !r.is_finite() || **r < 0.0)
        {
            return Err(LayoutError::InvalidRatio { index, value });
        }
        if let Some(separator) = self.machine.dragging_index() {
            return Err(LayoutError::DragInProgress(separator));
        }

        self.ratios = ratios.to_vec();
        self.persist();
        self.schedule_render();
        debug!("ratios set to {:?}", self.ratios);
        Ok(())
    }

    /// Hide or show a panel. Hidden panels render at width 0 and the visible
    /// ones share the track.
    pub fn set_panel_hidden(&mut self, id: &str, hidden: bool) -> Result<(), LayoutError> {
        if self.disposed {
            return Err(LayoutError::Disposed);
        }
        let index = self
            .index_of(id)
            .ok_or_else(|| LayoutError::UnknownPanel(id.to_string()))?;
        if let Some(separator) = self.machine.dragging_index() {
            return Err(LayoutError::DragInProgress(separator));
        }
        if self.hidden[index] != hidden {
            self.hidden[index] = hidden;
            self.needs_measure = true;
            self.schedule_render();
            debug!("panel '{id}' hidden = {hidden}");
        }
        Ok(())
    }

    // -- Internals shared by the other engine modules --

    pub(super) fn index_of(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    pub(super) fn persist(&mut self) {
        save_ratios(&mut self.store, &self.storage_key, &self.ratios);
    }

    pub(super) fn separator_visible(&self, index: usize) -> bool {
        !self.hidden[index] && !self.hidden[index + 1]
    }

    pub(super) fn visible_separator_count(&self, upto: usize) -> usize {
        (0..upto).filter(|&k| self.separator_visible(k)).count()
    }

    /// Track width for a measured container width.
    pub(super) fn track_width(&self, container_px: f64) -> f64 {
        let separators = self.visible_separator_count(self.separator_nodes.len()) as f64;
        (container_px - separators * self.config.separator_width as f64).max(0.0)
    }

    /// Raw ratios with every visible entry replaced by its rendered value.
    pub(super) fn settled_ratios(&self) -> Vec<f64> {
        let rendered = self.rendered_ratios();
        self.ratios
            .iter()
            .zip(&rendered)
            .zip(&self.hidden)
            .map(|((raw, shown), hidden)| if *hidden { *raw } else { *shown })
            .collect()
    }

    pub(super) fn update_separator_aria(&mut self, rendered: &[f64]) {
        for (k, &sep) in self.separator_nodes.iter().enumerate() {
            let left = &self.panels[k];
            self.host
                .set_attribute(sep, "aria-valuenow", &percent(rendered[k]).to_string());
            self.host
                .set_attribute(sep, "aria-valuemin", &percent(left.min_ratio).to_string());
            self.host
                .set_attribute(sep, "aria-valuemax", &percent(left.max_ratio).to_string());
        }
    }
}

fn build_dom<H: Host>(
    host: &mut H,
    container: NodeId,
    panels: &[ResolvedPanel],
    config: &LayoutConfig,
) -> (Vec<NodeId>, Vec<NodeId>) {
    host.set_style(container, "display", "flex");
    host.set_style(container, "flex-direction", "row");

    let separator_px = format!("{}px", config.separator_width);
    let mut panel_nodes = Vec::with_capacity(panels.len());
    let mut separator_nodes = Vec::with_capacity(panels.len() - 1);

    for (i, panel) in panels.iter().enumerate() {
        let node = host.create_element("div");
        host.add_class(node, "split-panel");
        host.add_class(node, &format!("split-panel-{}", class_suffix(&panel.id)));
        host.set_attribute(node, "data-panel-id", &panel.id);
        host.set_style(node, "flex", "0 0 auto");
        host.set_style(node, "overflow", "auto");
        host.append_child(container, node);
        panel_nodes.push(node);

        if i + 1 < panels.len() {
            let sep = host.create_element("div");
            host.add_class(sep, "split-separator");
            host.set_attribute(sep, "role", "separator");
            host.set_attribute(sep, "tabindex", "0");
            host.set_attribute(sep, "aria-orientation", "vertical");
            host.set_attribute(sep, "data-separator-index", &i.to_string());
            host.set_style(sep, "width", &separator_px);
            host.set_style(sep, "flex", &format!("0 0 {separator_px}"));
            host.set_style(sep, "cursor", "col-resize");
            host.append_child(container, sep);
            separator_nodes.push(sep);
        }
    }
    (panel_nodes, separator_nodes)
}

impl<H: Host, S: KeyValueStore> Drop for SplitLayout<H, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
