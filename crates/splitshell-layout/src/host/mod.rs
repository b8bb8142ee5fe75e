//! Page-side interfaces consumed by the layout engine.
//!
//! The engine reaches the DOM, event subscriptions and frame scheduling
//! only through these traits, so its ratio logic runs the same against a
//! browser binding or [`HeadlessDocument`].

mod headless;
mod types;

pub use headless::HeadlessDocument;
pub use types::*;

use splitshell_common::Rect;

/// DOM tree operations.
pub trait Document {
    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;
    fn create_element(&mut self, tag: &str) -> NodeId;
    fn append_child(&mut self, parent: NodeId, child: NodeId);
    /// Detach `node` from its parent. Detached nodes stay valid handles.
    fn remove_node(&mut self, node: NodeId);
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
    fn remove_style(&mut self, node: NodeId, property: &str);
    fn set_text(&mut self, node: NodeId, text: &str);
    /// Replace the node's children with parsed markup.
    fn set_inner_html(&mut self, node: NodeId, html: &str);
    /// Form control value (`textarea.value`).
    fn set_value(&mut self, node: NodeId, value: &str);
    fn value(&self, node: NodeId) -> String;
    fn bounding_rect(&self, node: NodeId) -> Rect;
    fn body(&self) -> NodeId;
    fn document_element(&self) -> NodeId;
}

/// Listener and observer registration.
///
/// The host routes matching events back to the owner of the returned id.
pub trait EventSource {
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId;
    fn remove_listener(&mut self, id: ListenerId);
    fn observe_resize(&mut self, node: NodeId) -> ObserverId;
    fn disconnect(&mut self, id: ObserverId);
}

/// `requestAnimationFrame` / `cancelAnimationFrame`.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Everything the engine needs from the page.
pub trait Host: Document + EventSource + FrameScheduler {}

impl<T: Document + EventSource + FrameScheduler> Host for T {}
