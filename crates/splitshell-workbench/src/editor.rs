//! Source textarea with a highlighted-change callback.

use splitshell_layout::{Host, ListenerId, ListenerKind, ListenerTarget, NodeId};

use crate::highlight::Highlighter;

type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct Editor<H: Host> {
    host: H,
    element: NodeId,
    listener: Option<ListenerId>,
    highlighter: Highlighter,
    mirror: Option<NodeId>,
    on_change: Option<ChangeCallback>,
}

impl<H: Host> Editor<H> {
    /// Create a detached `<textarea id=…>` and listen for `input` on it.
    pub fn new(mut host: H, id: &str, highlighter: Highlighter) -> Self {
        let element = host.create_element("textarea");
        host.set_attribute(element, "id", id);
        host.add_class(element, "editor-area");
        let listener = host.add_listener(ListenerTarget::Element(element), ListenerKind::Input);
        Self {
            host,
            element,
            listener: Some(listener),
            highlighter,
            mirror: None,
            on_change: None,
        }
    }

    /// Register the callback that receives highlighted HTML after every
    /// change. Replaces any earlier callback.
    pub fn on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Render the highlighted source into `node` on every change, starting
    /// with the current text.
    pub fn mirror_into(&mut self, node: NodeId) {
        self.mirror = Some(node);
        let html = self.highlighter.highlight(&self.host.value(self.element));
        self.host.set_inner_html(node, &html);
    }

    pub fn value(&self) -> String {
        self.host.value(self.element)
    }

    /// Replace the text and notify the change callback.
    pub fn set_value(&mut self, value: &str) {
        self.host.set_value(self.element, value);
        self.notify();
    }

    /// Handle an `input` event on the textarea.
    pub fn handle_input(&mut self) -> String {
        self.notify()
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    fn notify(&mut self) -> String {
        let html = self.highlighter.highlight(&self.host.value(self.element));
        if let Some(node) = self.mirror {
            self.host.set_inner_html(node, &html);
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(&html);
        }
        html
    }
}

impl<H: Host> Drop for Editor<H> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.host.remove_listener(id);
        }
    }
}
