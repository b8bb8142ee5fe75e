//! Tab bar with one visible content pane at a time.

use splitshell_layout::{Host, ListenerId, ListenerKind, ListenerTarget, NodeId};
use tracing::debug;

/// One registered tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub content: NodeId,
    pub button: NodeId,
}

/// Column container holding a tab bar and a content area.
pub struct TabbedView<H: Host> {
    host: H,
    container: NodeId,
    tab_bar: NodeId,
    content_area: NodeId,
    tabs: Vec<Tab>,
    listeners: Vec<ListenerId>,
    active: Option<String>,
}

impl<H: Host> TabbedView<H> {
    /// Create the (detached) view. The caller appends [`container`] where
    /// it should appear.
    ///
    /// [`container`]: TabbedView::container
    pub fn new(mut host: H, id: &str) -> Self {
        let container = host.create_element("div");
        host.set_attribute(container, "id", id);
        host.set_style(container, "display", "flex");
        host.set_style(container, "flex-direction", "column");
        host.set_style(container, "height", "100%");

        let tab_bar = host.create_element("div");
        host.add_class(tab_bar, "tabbed-view-bar");
        host.set_style(tab_bar, "display", "flex");

        let content_area = host.create_element("div");
        host.add_class(content_area, "tabbed-view-content");
        host.set_style(content_area, "flex", "1");
        host.set_style(content_area, "overflow", "auto");

        host.append_child(container, tab_bar);
        host.append_child(container, content_area);

        Self {
            host,
            container,
            tab_bar,
            content_area,
            tabs: Vec::new(),
            listeners: Vec::new(),
            active: None,
        }
    }

    /// Append a tab whose body is `content`. The content starts hidden;
    /// the first tab added becomes active.
    pub fn add_tab(&mut self, id: &str, label: &str, content: NodeId) -> NodeId {
        let button = self.host.create_element("button");
        self.host.add_class(button, "tab-button");
        self.host.set_attribute(button, "data-tab-id", id);
        self.host.set_text(button, label);
        self.host.append_child(self.tab_bar, button);
        let listener = self
            .host
            .add_listener(ListenerTarget::Element(button), ListenerKind::Click);
        self.listeners.push(listener);

        self.host.set_style(content, "display", "none");
        self.host.append_child(self.content_area, content);

        self.tabs.push(Tab {
            id: id.to_string(),
            label: label.to_string(),
            content,
            button,
        });
        if self.tabs.len() == 1 {
            self.activate(id);
        }
        button
    }

    /// Show only the tab `id`. Unknown ids are ignored.
    pub fn activate(&mut self, id: &str) -> bool {
        if !self.tabs.iter().any(|t| t.id == id) {
            debug!("ignoring unknown tab '{id}'");
            return false;
        }
        for tab in &self.tabs {
            if tab.id == id {
                self.host.add_class(tab.button, "active");
                self.host.set_style(tab.content, "display", "block");
            } else {
                self.host.remove_class(tab.button, "active");
                self.host.set_style(tab.content, "display", "none");
            }
        }
        self.active = Some(id.to_string());
        true
    }

    /// Route a click on a tab button.
    pub fn handle_click(&mut self, button: NodeId) -> bool {
        let Some(id) = self
            .tabs
            .iter()
            .find(|t| t.button == button)
            .map(|t| t.id.clone())
        else {
            return false;
        };
        self.activate(&id)
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn content_area(&self) -> NodeId {
        self.content_area
    }
}

impl<H: Host> Drop for TabbedView<H> {
    fn drop(&mut self) {
        for id in self.listeners.drain(..) {
            self.host.remove_listener(id);
        }
    }
}
