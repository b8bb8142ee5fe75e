//! Opaque handles and listener descriptors shared by host implementations.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Window,
    Document,
    Element(NodeId),
}

/// Which DOM event a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    KeyDown,
    Resize,
    Click,
    Input,
    Change,
}

impl ListenerKind {
    /// DOM event type name.
    pub fn event_name(&self) -> &'static str {
        match self {
            ListenerKind::PointerDown => "mousedown",
            ListenerKind::PointerMove => "mousemove",
            ListenerKind::PointerUp => "mouseup",
            ListenerKind::TouchStart => "touchstart",
            ListenerKind::TouchMove => "touchmove",
            ListenerKind::TouchEnd => "touchend",
            ListenerKind::TouchCancel => "touchcancel",
            ListenerKind::KeyDown => "keydown",
            ListenerKind::Resize => "resize",
            ListenerKind::Click => "click",
            ListenerKind::Input => "input",
            ListenerKind::Change => "change",
        }
    }
}
