//! In-memory [`Host`](super::Host) for tests and offline replay.
//!
//! Clones share one tree, so a test can keep a handle while the engine owns
//! another and inspect every write the engine makes.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use splitshell_common::Rect;

use super::{
    Document, EventSource, FrameHandle, FrameScheduler, ListenerId, ListenerKind, ListenerTarget,
    NodeId, ObserverId,
};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    inner_html: String,
    value: String,
    rect: Rect,
}

#[derive(Debug)]
struct DomTree {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    listeners: HashMap<ListenerId, (ListenerTarget, ListenerKind)>,
    observers: HashMap<ObserverId, NodeId>,
    frames: BTreeSet<FrameHandle>,
    next_listener: u32,
    next_observer: u32,
    next_frame: u32,
    mutations: u64,
}

impl DomTree {
    fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            listeners: HashMap::new(),
            observers: HashMap::new(),
            frames: BTreeSet::new(),
            next_listener: 1,
            next_observer: 1,
            next_frame: 1,
            mutations: 0,
        };
        let root = tree.alloc("html");
        let body = tree.alloc("body");
        tree.node_mut(body).parent = Some(root);
        tree.node_mut(root).children.push(body);
        tree.root = root;
        tree.body = body;
        tree
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    fn is_connected(&self, mut id: NodeId) -> bool {
        loop {
            if id == self.root {
                return true;
            }
            match self.node(id).parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }
}

/// Shared in-memory document.
#[derive(Debug, Clone)]
pub struct HeadlessDocument {
    inner: Rc<RefCell<DomTree>>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    /// An empty document containing only `<html>` and `<body>`.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DomTree::new())),
        }
    }

    /// Append a `<div id=…>` to the body with the given pixel width.
    pub fn create_container(&self, id: &str, width: f64) -> NodeId {
        let mut tree = self.inner.borrow_mut();
        let node = tree.alloc("div");
        tree.node_mut(node)
            .attributes
            .insert("id".into(), id.to_string());
        tree.node_mut(node).rect = Rect::new(0.0, 0.0, width, 600.0);
        let body = tree.body;
        tree.node_mut(node).parent = Some(body);
        tree.node_mut(body).children.push(node);
        node
    }

    /// Simulate layout assigning `rect` to `node`.
    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.inner.borrow_mut().node_mut(node).rect = rect;
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.inner.borrow().node(node).tag.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.inner.borrow().node(node).styles.get(property).cloned()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.inner
            .borrow()
            .node(node)
            .classes
            .iter()
            .any(|c| c == class)
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.inner.borrow().node(node).classes.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.inner.borrow().node(node).children.clone()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.borrow().node(node).parent
    }

    pub fn text(&self, node: NodeId) -> String {
        self.inner.borrow().node(node).text.clone()
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        self.inner.borrow().node(node).inner_html.clone()
    }

    /// Number of live listeners across all targets.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn has_listener(&self, target: ListenerTarget, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .listeners
            .values()
            .any(|(t, k)| *t == target && *k == kind)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.inner.borrow().observers.values().any(|n| *n == node)
    }

    /// Frames requested and not yet fired or cancelled.
    pub fn pending_frames(&self) -> Vec<FrameHandle> {
        self.inner.borrow().frames.iter().copied().collect()
    }

    /// Fire all pending frames: clears them and returns their handles in
    /// request order for delivery to their owners.
    pub fn take_frames(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.inner.borrow_mut().frames)
            .into_iter()
            .collect()
    }

    /// Count of DOM writes since creation.
    pub fn mutation_count(&self) -> u64 {
        self.inner.borrow().mutations
    }

    fn mutate(&self, f: impl FnOnce(&mut DomTree)) {
        let mut tree = self.inner.borrow_mut();
        f(&mut tree);
        tree.mutations += 1;
    }
}

impl Document for HeadlessDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.inner.borrow();
        (0..tree.nodes.len() as u32).map(NodeId).find(|n| {
            tree.node(*n).attributes.get("id").map(String::as_str) == Some(id)
                && tree.is_connected(*n)
        })
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.inner.borrow_mut().alloc(tag)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.mutate(|tree| {
            tree.detach(child);
            tree.node_mut(child).parent = Some(parent);
            tree.node_mut(parent).children.push(child);
        });
    }

    fn remove_node(&mut self, node: NodeId) {
        self.mutate(|tree| tree.detach(node));
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.mutate(|tree| {
            tree.node_mut(node)
                .attributes
                .insert(name.to_string(), value.to_string());
        });
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.inner.borrow().node(node).attributes.get(name).cloned()
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.mutate(|tree| {
            let classes = &mut tree.node_mut(node).classes;
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.mutate(|tree| tree.node_mut(node).classes.retain(|c| c != class));
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.mutate(|tree| {
            tree.node_mut(node)
                .styles
                .insert(property.to_string(), value.to_string());
        });
    }

    fn remove_style(&mut self, node: NodeId, property: &str) {
        self.mutate(|tree| {
            tree.node_mut(node).styles.remove(property);
        });
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.mutate(|tree| {
            let children = std::mem::take(&mut tree.node_mut(node).children);
            for child in children {
                tree.node_mut(child).parent = None;
            }
            let n = tree.node_mut(node);
            n.text = text.to_string();
            n.inner_html.clear();
        });
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.mutate(|tree| {
            let children = std::mem::take(&mut tree.node_mut(node).children);
            for child in children {
                tree.node_mut(child).parent = None;
            }
            let n = tree.node_mut(node);
            n.inner_html = html.to_string();
            n.text.clear();
        });
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        self.mutate(|tree| tree.node_mut(node).value = value.to_string());
    }

    fn value(&self, node: NodeId) -> String {
        self.inner.borrow().node(node).value.clone()
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.inner.borrow().node(node).rect
    }

    fn body(&self) -> NodeId {
        self.inner.borrow().body
    }

    fn document_element(&self) -> NodeId {
        self.inner.borrow().root
    }
}

impl EventSource for HeadlessDocument {
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        let mut tree = self.inner.borrow_mut();
        let id = ListenerId(tree.next_listener);
        tree.next_listener += 1;
        tree.listeners.insert(id, (target, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(&id);
    }

    fn observe_resize(&mut self, node: NodeId) -> ObserverId {
        let mut tree = self.inner.borrow_mut();
        let id = ObserverId(tree.next_observer);
        tree.next_observer += 1;
        tree.observers.insert(id, node);
        id
    }

    fn disconnect(&mut self, id: ObserverId) {
        self.inner.borrow_mut().observers.remove(&id);
    }
}

impl FrameScheduler for HeadlessDocument {
    fn request_frame(&mut self) -> FrameHandle {
        let mut tree = self.inner.borrow_mut();
        let handle = FrameHandle(tree.next_frame);
        tree.next_frame += 1;
        tree.frames.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.inner.borrow_mut().frames.remove(&handle);
    }
}
