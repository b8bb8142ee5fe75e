//! Resizable multi-panel split layout.
//!
//! [`SplitLayout`] owns N panels and N-1 separators laid out in one row
//! inside a host container. It keeps one width ratio per panel, turns
//! pointer, touch and keyboard input into ratio updates, renders pixel
//! widths at most once per animation frame, and persists the ratios in a
//! [`KeyValueStore`] keyed by container id.
//!
//! The engine never touches a browser directly: everything it needs from
//! the page goes through the [`Host`] traits, and the host delivers input
//! as [`LayoutEvent`] values. [`HeadlessDocument`] and [`MemoryStore`] are
//! in-memory implementations.

pub mod engine;
pub mod host;
pub mod input;
pub mod machine;
pub mod panel;
pub mod ratios;
pub mod store;

pub use engine::SplitLayout;
pub use host::{
    Document, EventSource, FrameHandle, FrameScheduler, HeadlessDocument, Host, ListenerId,
    ListenerKind, ListenerTarget, NodeId, ObserverId,
};
pub use input::{EventResponse, Key, LayoutEvent, TouchPoint};
pub use machine::{DragMachine, DragPhase, DragSource};
pub use panel::{PanelConfig, ResolvedPanel};
pub use store::{KeyValueStore, MemoryStore};
