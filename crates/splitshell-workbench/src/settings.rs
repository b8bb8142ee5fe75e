//! The settings page: sidebar in settings mode plus the editor theme
//! selector.

use splitshell_common::LayoutError;
use splitshell_config::ThemeConfig;
use splitshell_layout::{Host, KeyValueStore, ListenerId, ListenerKind, ListenerTarget, NodeId};
use tracing::debug;

use crate::sidebar::{Sidebar, SidebarAction};
use crate::theme::ThemeManager;

/// `(value, label)` of each theme option.
pub const THEMES: &[(&str, &str)] = &[("light", "Light"), ("dark", "Dark")];

pub struct SettingsPage<H: Host + Clone, S: KeyValueStore> {
    host: H,
    sidebar: Sidebar<H>,
    theme: ThemeManager<H, S>,
    container: NodeId,
    theme_select: NodeId,
    linting: NodeId,
    listener: Option<ListenerId>,
}

impl<H: Host + Clone, S: KeyValueStore> SettingsPage<H, S> {
    /// Apply the stored theme, show the settings sidebar and mount the
    /// settings form inside the element `content_id`.
    pub fn new(host: H, store: S, content_id: &str, config: &ThemeConfig) -> Result<Self, LayoutError> {
        let mut dom = host.clone();
        let target = dom
            .element_by_id(content_id)
            .ok_or_else(|| LayoutError::ContainerNotFound(content_id.to_string()))?;

        let mut theme = ThemeManager::new(host.clone(), store, config);
        let current = theme.init().to_string();

        let mut sidebar = Sidebar::new(host, "sidebar");
        sidebar.set_content("settings", None);

        let container = dom.create_element("div");
        dom.set_attribute(container, "id", "settings-container");
        let heading = dom.create_element("h2");
        dom.set_text(heading, "Settings");
        dom.append_child(container, heading);

        let editor_section = section(&mut dom, container, "Editor");
        let label = dom.create_element("label");
        let caption = dom.create_element("span");
        dom.set_text(caption, "Theme:");
        dom.append_child(label, caption);
        let theme_select = dom.create_element("select");
        dom.set_attribute(theme_select, "id", "editor-theme");
        for (value, text) in THEMES {
            let option = dom.create_element("option");
            dom.set_attribute(option, "value", value);
            if *value == current {
                dom.set_attribute(option, "selected", "");
            }
            dom.set_text(option, text);
            dom.append_child(theme_select, option);
        }
        dom.set_value(theme_select, &current);
        dom.append_child(label, theme_select);
        dom.append_child(editor_section, label);

        let analysis_section = section(&mut dom, container, "Code Analysis");
        let label = dom.create_element("label");
        let linting = dom.create_element("input");
        dom.set_attribute(linting, "type", "checkbox");
        dom.set_attribute(linting, "id", "enable-linting");
        dom.set_attribute(linting, "checked", "");
        dom.append_child(label, linting);
        let caption = dom.create_element("span");
        dom.set_text(caption, "Enable Linting");
        dom.append_child(label, caption);
        dom.append_child(analysis_section, label);

        dom.append_child(target, container);
        let listener = dom.add_listener(ListenerTarget::Element(theme_select), ListenerKind::Change);

        Ok(Self {
            host: dom,
            sidebar,
            theme,
            container,
            theme_select,
            linting,
            listener: Some(listener),
        })
    }

    /// Handle `change` on `node`. Picking a known theme applies and
    /// persists it.
    pub fn handle_change(&mut self, node: NodeId) -> bool {
        if node != self.theme_select {
            return false;
        }
        let value = self.host.value(self.theme_select);
        if !THEMES.iter().any(|(known, _)| *known == value) {
            debug!("ignoring unknown theme '{value}'");
            return false;
        }
        self.theme.set(&value);
        true
    }

    pub fn handle_click(&mut self, node: NodeId) -> Option<SidebarAction> {
        self.sidebar.handle_click(node)
    }

    pub fn current_theme(&self) -> &str {
        self.theme.current()
    }

    pub fn sidebar(&self) -> &Sidebar<H> {
        &self.sidebar
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn theme_select(&self) -> NodeId {
        self.theme_select
    }

    pub fn linting_toggle(&self) -> NodeId {
        self.linting
    }
}

fn section<H: Host>(host: &mut H, parent: NodeId, title: &str) -> NodeId {
    let node = host.create_element("div");
    host.add_class(node, "settings-section");
    let heading = host.create_element("h3");
    host.set_text(heading, title);
    host.append_child(node, heading);
    host.append_child(parent, node);
    node
}

impl<H: Host + Clone, S: KeyValueStore> Drop for SettingsPage<H, S> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.host.remove_listener(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use splitshell_layout::{Document, HeadlessDocument, MemoryStore};

    use crate::sidebar::SidebarContent;

    fn page(store: &MemoryStore) -> (HeadlessDocument, SettingsPage<HeadlessDocument, MemoryStore>) {
        let doc = HeadlessDocument::new();
        doc.create_container("settings-content", 600.0);
        let page = SettingsPage::new(
            doc.clone(),
            store.clone(),
            "settings-content",
            &ThemeConfig::default(),
        )
        .unwrap();
        (doc, page)
    }

    #[test]
    fn mounts_form_and_settings_sidebar() {
        let store = MemoryStore::new();
        let (doc, page) = page(&store);
        let target = doc.element_by_id("settings-content").unwrap();
        assert_eq!(doc.parent(page.container()), Some(target));
        assert_eq!(page.sidebar().content(), Some(SidebarContent::Settings));
        assert_eq!(page.sidebar().active_section(), Some("Editor"));
        assert_eq!(doc.children(page.theme_select()).len(), 2);
        assert_eq!(doc.value(page.theme_select()), "light");
        assert_eq!(
            doc.attribute(page.linting_toggle(), "id").as_deref(),
            Some("enable-linting")
        );
    }

    #[test]
    fn selector_starts_on_stored_theme() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        let (doc, page) = page(&store);
        assert_eq!(doc.value(page.theme_select()), "dark");
        let options = doc.children(page.theme_select());
        assert!(doc.attribute(options[1], "selected").is_some());
        assert!(doc.attribute(options[0], "selected").is_none());
    }

    #[test]
    fn changing_the_selector_applies_and_persists() {
        let store = MemoryStore::new();
        let (mut doc, mut page) = page(&store);
        let select = page.theme_select();
        assert!(doc.has_listener(ListenerTarget::Element(select), ListenerKind::Change));

        doc.set_value(select, "dark");
        assert!(page.handle_change(select));
        assert_eq!(page.current_theme(), "dark");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        let root = doc.document_element();
        assert_eq!(doc.attribute(root, "data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn unknown_values_and_other_nodes_are_ignored() {
        let store = MemoryStore::new();
        let (mut doc, mut page) = page(&store);
        let select = page.theme_select();
        doc.set_value(select, "neon");
        assert!(!page.handle_change(select));
        assert!(!page.handle_change(page.container()));
        assert_eq!(page.current_theme(), "light");
    }

    #[test]
    fn sidebar_nav_clicks_are_routed() {
        let store = MemoryStore::new();
        let (_doc, mut page) = page(&store);
        let about = page.sidebar().section_items()[4];
        assert_eq!(
            page.handle_click(about),
            Some(SidebarAction::SectionSelected("About"))
        );
    }

    #[test]
    fn missing_content_element_fails() {
        let doc = HeadlessDocument::new();
        let result = SettingsPage::new(doc, MemoryStore::new(), "nowhere", &ThemeConfig::default());
        assert!(matches!(result, Err(LayoutError::ContainerNotFound(_))));
    }

    #[test]
    fn drop_releases_all_listeners() {
        let store = MemoryStore::new();
        let (doc, page) = page(&store);
        assert_eq!(doc.listener_count(), 3 + 5 + 1);
        drop(page);
        assert_eq!(doc.listener_count(), 0);
    }
}
