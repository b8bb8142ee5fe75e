//! Page-level pieces of the editor shell built on the split layout.
//!
//! - [`ThemeManager`]: persisted light/dark theme on the document element
//! - [`TabbedView`]: tab bar plus content area
//! - [`Sidebar`]: activity bar and collapsible side panel
//! - [`Editor`] and [`Highlighter`]: textarea with keyword highlighting
//! - [`AstWorkbench`]: the AST viewer page wiring them together
//! - [`SettingsPage`]: settings form with the theme selector

pub mod editor;
pub mod highlight;
pub mod settings;
pub mod sidebar;
pub mod tabs;
pub mod theme;
pub mod workbench;

pub use editor::Editor;
pub use highlight::Highlighter;
pub use settings::SettingsPage;
pub use sidebar::{Sidebar, SidebarAction, SidebarContent};
pub use tabs::{Tab, TabbedView};
pub use theme::ThemeManager;
pub use workbench::{placeholder_ast, AstNode, AstWorkbench};
