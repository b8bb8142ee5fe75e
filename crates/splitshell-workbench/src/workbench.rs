//! The AST viewer page: source editor on the left, JSON/Graph preview on
//! the right, separated by a draggable split.

use serde::Serialize;
use splitshell_common::{LayoutError, ShellError};
use splitshell_config::SplitShellConfig;
use splitshell_layout::{
    EventResponse, FrameHandle, Host, KeyValueStore, LayoutEvent, NodeId, PanelConfig,
    SplitLayout,
};
use tracing::{info, warn};

use crate::editor::Editor;
use crate::highlight::Highlighter;
use crate::sidebar::{Sidebar, SidebarAction};
use crate::tabs::TabbedView;
use crate::theme::ThemeManager;

pub const EDITOR_PANEL: &str = "editor";
pub const PREVIEW_PANEL: &str = "preview";

/// Minimal AST shape shown in the JSON tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<AstNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// No parser is wired in yet, so every edit maps to the same tree.
pub fn placeholder_ast() -> AstNode {
    AstNode {
        kind: "Program".into(),
        body: vec![AstNode {
            kind: "Comment".into(),
            body: Vec::new(),
            value: Some("AST will be generated here".into()),
        }],
        value: None,
    }
}

pub struct AstWorkbench<H: Host + Clone + 'static, S: KeyValueStore + Clone> {
    theme: ThemeManager<H, S>,
    sidebar: Sidebar<H>,
    layout: SplitLayout<H, S>,
    editor: Editor<H>,
    highlight_view: NodeId,
    tabs: TabbedView<H>,
    json_view: NodeId,
    graph_view: NodeId,
}

impl<H: Host + Clone + 'static, S: KeyValueStore + Clone> AstWorkbench<H, S> {
    pub fn new(
        host: H,
        store: S,
        container_id: &str,
        config: &SplitShellConfig,
    ) -> Result<Self, ShellError> {
        let mut theme = ThemeManager::new(host.clone(), store.clone(), &config.theme);
        theme.init();

        let mut sidebar = Sidebar::new(host.clone(), "sidebar");
        sidebar.set_content("ast-viewer", None);

        let panels = [PanelConfig::new(EDITOR_PANEL), PanelConfig::new(PREVIEW_PANEL)];
        let layout = SplitLayout::new(host.clone(), store, container_id, &panels, &config.layout)?;
        let editor_panel = panel_node(&layout, EDITOR_PANEL)?;
        let preview_panel = panel_node(&layout, PREVIEW_PANEL)?;

        let highlighter = Highlighter::from_config(&config.editor)
            .map_err(|e| ShellError::Other(format!("invalid editor keywords: {e}")))?;
        let mut editor = Editor::new(host.clone(), "ast-editor", highlighter);

        let mut dom = host.clone();
        dom.append_child(editor_panel, editor.element());

        let highlight_view = dom.create_element("pre");
        dom.set_attribute(highlight_view, "id", "highlight-view");
        dom.set_attribute(highlight_view, "aria-hidden", "true");
        dom.add_class(highlight_view, "editor-highlight");
        dom.append_child(editor_panel, highlight_view);
        editor.mirror_into(highlight_view);

        let json_view = dom.create_element("div");
        dom.set_attribute(json_view, "id", "json-view");
        dom.set_style(json_view, "height", "100%");
        dom.set_style(json_view, "overflow", "auto");
        dom.set_style(json_view, "font-family", "monospace");
        dom.set_style(json_view, "white-space", "pre");

        let graph_view = dom.create_element("div");
        dom.set_attribute(graph_view, "id", "graph-view");
        dom.set_style(graph_view, "height", "100%");
        dom.set_text(graph_view, "Graph visualization will be implemented");

        let mut tabs = TabbedView::new(host.clone(), "ast-tabs");
        tabs.add_tab("json", "JSON", json_view);
        tabs.add_tab("graph", "Graph", graph_view);
        dom.append_child(preview_panel, tabs.container());

        let mut sink = host;
        editor.on_change(move |_highlighted| match serde_json::to_string_pretty(&placeholder_ast()) {
            Ok(json) => sink.set_text(json_view, &json),
            Err(e) => warn!("failed to encode AST: {e}"),
        });

        info!(container = container_id, "AST workbench ready");
        Ok(Self {
            theme,
            sidebar,
            layout,
            editor,
            highlight_view,
            tabs,
            json_view,
            graph_view,
        })
    }

    /// Forward an input event to the split layout.
    pub fn handle_layout_event(&mut self, event: LayoutEvent) -> EventResponse {
        self.layout.handle(event)
    }

    pub fn on_animation_frame(&mut self, handle: FrameHandle) {
        self.layout.on_animation_frame(handle);
    }

    /// `input` on the editor textarea. Returns the highlighted source.
    pub fn handle_input(&mut self) -> String {
        self.editor.handle_input()
    }

    pub fn handle_tab_click(&mut self, button: NodeId) -> bool {
        self.tabs.handle_click(button)
    }

    /// Clicks on the activity bar or side panel.
    pub fn handle_sidebar_click(&mut self, node: NodeId) -> Option<SidebarAction> {
        self.sidebar.handle_click(node)
    }

    pub fn sidebar(&self) -> &Sidebar<H> {
        &self.sidebar
    }

    pub fn layout(&self) -> &SplitLayout<H, S> {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut SplitLayout<H, S> {
        &mut self.layout
    }

    pub fn editor_mut(&mut self) -> &mut Editor<H> {
        &mut self.editor
    }

    pub fn tabs(&self) -> &TabbedView<H> {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabbedView<H> {
        &mut self.tabs
    }

    pub fn theme_mut(&mut self) -> &mut ThemeManager<H, S> {
        &mut self.theme
    }

    pub fn highlight_view(&self) -> NodeId {
        self.highlight_view
    }

    pub fn json_view(&self) -> NodeId {
        self.json_view
    }

    pub fn graph_view(&self) -> NodeId {
        self.graph_view
    }

    pub fn dispose(&mut self) {
        self.layout.dispose();
    }
}

fn panel_node<H: Host, S: KeyValueStore>(
    layout: &SplitLayout<H, S>,
    id: &str,
) -> Result<NodeId, LayoutError> {
    layout
        .panel(id)
        .ok_or_else(|| LayoutError::UnknownPanel(id.to_string()))
}
