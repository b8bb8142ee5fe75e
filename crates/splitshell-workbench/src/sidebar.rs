//! Activity bar and the collapsible side panel next to each page.
//!
//! The activity bar is always shown. Its explorer button collapses and
//! restores the side panel, whose body is one of three fixed views.

use splitshell_layout::{Host, ListenerId, ListenerKind, ListenerTarget, NodeId};
use tracing::debug;

/// The views the side panel can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarContent {
    Explorer,
    AstViewer,
    Settings,
}

impl SidebarContent {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "explorer" => Some(Self::Explorer),
            "ast-viewer" => Some(Self::AstViewer),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }
}

/// Result of a click routed through [`Sidebar::handle_click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    ExplorerToggled { collapsed: bool },
    SearchRequested,
    SettingsRequested,
    FolderToggled { expanded: bool },
    SectionSelected(&'static str),
}

enum Entry {
    File(&'static str),
    Folder(&'static str, &'static [Entry]),
}

const PROJECT_TREE: &[Entry] = &[
    Entry::Folder(
        "src",
        &[
            Entry::File("index.ts"),
            Entry::File("ast-viewer.ts"),
            Entry::File("settings.ts"),
            Entry::File("styles.css"),
            Entry::Folder(
                "modules",
                &[Entry::File("editor.ts"), Entry::File("sidebar.ts")],
            ),
        ],
    ),
    Entry::File("index.html"),
    Entry::File("ast-viewer.html"),
    Entry::File("settings.html"),
    Entry::File("webpack.config.js"),
];

const SETTINGS_SECTIONS: &[&str] = &[
    "Editor",
    "Code Analysis",
    "File Associations",
    "Extensions",
    "About",
];

struct Folder {
    label: NodeId,
    item: NodeId,
    expanded: bool,
}

pub struct Sidebar<H: Host> {
    host: H,
    activity_bar: NodeId,
    explorer_button: NodeId,
    search_button: NodeId,
    settings_button: NodeId,
    container: NodeId,
    collapsed: bool,
    content: Option<SidebarContent>,
    bar_listeners: Vec<ListenerId>,
    content_listeners: Vec<ListenerId>,
    folders: Vec<Folder>,
    sections: Vec<(NodeId, &'static str)>,
    active_section: Option<&'static str>,
}

impl<H: Host> Sidebar<H> {
    /// Build the activity bar on `<body>` and adopt the element
    /// `container_id` as the side panel, creating it when missing.
    pub fn new(mut host: H, container_id: &str) -> Self {
        let body = host.body();
        let activity_bar = host.create_element("div");
        host.set_attribute(activity_bar, "id", "fixed-sidebar");
        host.append_child(body, activity_bar);

        let mut bar_listeners = Vec::with_capacity(3);
        let explorer_button =
            activity_button(&mut host, activity_bar, "Explorer", "📁", &mut bar_listeners);
        let search_button =
            activity_button(&mut host, activity_bar, "Search", "🔍", &mut bar_listeners);
        let settings_button =
            activity_button(&mut host, activity_bar, "Settings", "⚙️", &mut bar_listeners);

        let container = match host.element_by_id(container_id) {
            Some(node) => node,
            None => {
                let node = host.create_element("div");
                host.set_attribute(node, "id", container_id);
                host.append_child(body, node);
                node
            }
        };

        let mut sidebar = Self {
            host,
            activity_bar,
            explorer_button,
            search_button,
            settings_button,
            container,
            collapsed: false,
            content: None,
            bar_listeners,
            content_listeners: Vec::new(),
            folders: Vec::new(),
            sections: Vec::new(),
            active_section: None,
        };
        sidebar.update_layout();
        sidebar
    }

    /// Flip the side panel between collapsed and shown. Returns the new
    /// collapsed state.
    pub fn toggle_explorer(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.update_layout();
        debug!(collapsed = self.collapsed, "side panel toggled");
        self.collapsed
    }

    /// Replace the side panel body with the view `name`. `extra` is
    /// appended below the explorer tree. Unknown names leave an empty
    /// body.
    pub fn set_content(&mut self, name: &str, extra: Option<NodeId>) {
        self.clear_content();
        let kind = SidebarContent::from_name(name);
        let body = match kind {
            Some(SidebarContent::Explorer) => self.explorer_content(extra),
            Some(SidebarContent::AstViewer) => self.ast_viewer_content(),
            Some(SidebarContent::Settings) => self.settings_content(),
            None => {
                debug!("unknown sidebar content '{name}'");
                self.host.create_element("div")
            }
        };
        let wrapper = self.host.create_element("div");
        self.host.add_class(wrapper, "explorer-content");
        self.host.append_child(wrapper, body);
        self.host.append_child(self.container, wrapper);
        self.content = kind;
    }

    /// Route a click on any sidebar element. `None` when the node is not
    /// one of ours.
    pub fn handle_click(&mut self, node: NodeId) -> Option<SidebarAction> {
        if node == self.explorer_button {
            let collapsed = self.toggle_explorer();
            return Some(SidebarAction::ExplorerToggled { collapsed });
        }
        if node == self.search_button {
            return Some(SidebarAction::SearchRequested);
        }
        if node == self.settings_button {
            return Some(SidebarAction::SettingsRequested);
        }
        if let Some(folder) = self.folders.iter_mut().find(|f| f.label == node) {
            folder.expanded = !folder.expanded;
            if folder.expanded {
                self.host.add_class(folder.item, "expanded");
            } else {
                self.host.remove_class(folder.item, "expanded");
            }
            return Some(SidebarAction::FolderToggled {
                expanded: folder.expanded,
            });
        }
        let label = self
            .sections
            .iter()
            .find(|(item, _)| *item == node)
            .map(|(_, label)| *label)?;
        self.select_section(node, label);
        Some(SidebarAction::SectionSelected(label))
    }

    pub fn is_explorer_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn content(&self) -> Option<SidebarContent> {
        self.content
    }

    pub fn active_section(&self) -> Option<&'static str> {
        self.active_section
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn activity_bar(&self) -> NodeId {
        self.activity_bar
    }

    pub fn toggle_button(&self) -> NodeId {
        self.explorer_button
    }

    /// Clickable folder labels of the explorer tree, in document order.
    pub fn folder_labels(&self) -> Vec<NodeId> {
        self.folders.iter().map(|f| f.label).collect()
    }

    /// Settings navigation items, in document order.
    pub fn section_items(&self) -> Vec<NodeId> {
        self.sections.iter().map(|(item, _)| *item).collect()
    }

    fn update_layout(&mut self) {
        if self.collapsed {
            self.host.add_class(self.container, "collapsed");
            self.host.add_class(self.container, "hidden");
        } else {
            self.host.remove_class(self.container, "collapsed");
            self.host.remove_class(self.container, "hidden");
        }
        self.host.set_style(self.activity_bar, "display", "block");
    }

    fn clear_content(&mut self) {
        for id in self.content_listeners.drain(..) {
            self.host.remove_listener(id);
        }
        self.folders.clear();
        self.sections.clear();
        self.active_section = None;
        self.host.set_inner_html(self.container, "");
    }

    fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.host.create_element(tag);
        self.host.append_child(parent, node);
        node
    }

    fn append_text(&mut self, parent: NodeId, tag: &str, text: &str) -> NodeId {
        let node = self.append(parent, tag);
        self.host.set_text(node, text);
        node
    }

    fn listen(&mut self, node: NodeId) {
        let id = self
            .host
            .add_listener(ListenerTarget::Element(node), ListenerKind::Click);
        self.content_listeners.push(id);
    }

    fn explorer_content(&mut self, extra: Option<NodeId>) -> NodeId {
        let root = self.host.create_element("div");
        self.append_text(root, "h3", "EXPLORER");

        let toolbar = self.append(root, "div");
        self.host.add_class(toolbar, "explorer-toolbar");
        for (title, icon) in [("New File", "📄"), ("New Folder", "📁"), ("Refresh", "🔄")] {
            let button = self.append(toolbar, "button");
            self.host.set_attribute(button, "title", title);
            let span = self.append_text(button, "span", icon);
            self.host.add_class(span, "icon");
        }

        let tree = self.append(root, "div");
        self.host.add_class(tree, "explorer-tree");
        let list = self.append(tree, "ul");
        self.build_tree(list, PROJECT_TREE);

        if let Some(extra) = extra {
            self.host.append_child(root, extra);
        }
        root
    }

    fn build_tree(&mut self, list: NodeId, entries: &[Entry]) {
        for entry in entries {
            match entry {
                Entry::File(name) => {
                    let item = self.append_text(list, "li", &format!("📄 {name}"));
                    self.host.add_class(item, "file");
                }
                Entry::Folder(name, children) => {
                    let item = self.append(list, "li");
                    self.host.add_class(item, "folder");
                    let label = self.append_text(item, "span", &format!("📁 {name}"));
                    self.host.add_class(label, "folder-name");
                    self.listen(label);
                    self.folders.push(Folder {
                        label,
                        item,
                        expanded: false,
                    });
                    let nested = self.append(item, "ul");
                    self.build_tree(nested, children);
                }
            }
        }
    }

    fn ast_viewer_content(&mut self) -> NodeId {
        let root = self.host.create_element("div");
        self.append_text(root, "h3", "AST VIEWER");
        let controls = self.append(root, "div");
        self.host.add_class(controls, "ast-controls");

        let options = self.append(controls, "div");
        self.host.add_class(options, "control-group");
        self.append_text(options, "h4", "View Options");
        for (id, text) in [("show-types", "Show Types"), ("show-modifiers", "Show Modifiers")] {
            let label = self.append(options, "label");
            let input = self.append(label, "input");
            self.host.set_attribute(input, "type", "checkbox");
            self.host.set_attribute(input, "id", id);
            self.host.set_attribute(input, "checked", "");
            self.append_text(label, "span", text);
        }

        let navigation = self.append(controls, "div");
        self.host.add_class(navigation, "control-group");
        self.append_text(navigation, "h4", "Navigation");
        for (id, text) in [("expand-all", "Expand All"), ("collapse-all", "Collapse All")] {
            let button = self.append_text(navigation, "button", text);
            self.host.set_attribute(button, "id", id);
        }
        root
    }

    fn settings_content(&mut self) -> NodeId {
        let root = self.host.create_element("div");
        self.append_text(root, "h3", "SETTINGS");
        let nav = self.append(root, "div");
        self.host.add_class(nav, "settings-nav");
        let list = self.append(nav, "ul");
        for &label in SETTINGS_SECTIONS {
            let item = self.append_text(list, "li", label);
            self.listen(item);
            self.sections.push((item, label));
        }
        if let Some(&(first, label)) = self.sections.first() {
            self.select_section(first, label);
        }
        root
    }

    fn select_section(&mut self, selected: NodeId, label: &'static str) {
        for &(item, _) in &self.sections {
            if item == selected {
                self.host.add_class(item, "active");
            } else {
                self.host.remove_class(item, "active");
            }
        }
        self.active_section = Some(label);
    }
}

fn activity_button<H: Host>(
    host: &mut H,
    bar: NodeId,
    label: &str,
    icon: &str,
    listeners: &mut Vec<ListenerId>,
) -> NodeId {
    let button = host.create_element("button");
    host.set_attribute(button, "aria-label", label);
    host.set_attribute(button, "title", label);
    host.set_text(button, icon);
    host.append_child(bar, button);
    listeners.push(host.add_listener(ListenerTarget::Element(button), ListenerKind::Click));
    button
}

impl<H: Host> Drop for Sidebar<H> {
    fn drop(&mut self) {
        for id in self.bar_listeners.drain(..).chain(self.content_listeners.drain(..)) {
            self.host.remove_listener(id);
        }
    }
}
