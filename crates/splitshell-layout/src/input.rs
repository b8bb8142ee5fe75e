//! Input events the host delivers to the engine.

use serde::{Deserialize, Serialize};

/// Keys the separators react to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    #[serde(other)]
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    #[serde(default)]
    pub client_y: f64,
}

/// One DOM event, already routed to the layout that registered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutEvent {
    /// `mousedown` on a separator.
    PointerDown { separator: usize },
    /// Document `mousemove`.
    PointerMove { client_x: f64 },
    /// Document `mouseup`.
    PointerUp,
    /// `touchstart` on a separator.
    TouchStart { separator: usize },
    /// Document `touchmove`; the first touch is the primary one.
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
    TouchCancel,
    /// `keydown` on a focused separator.
    KeyDown {
        separator: usize,
        key: Key,
        #[serde(default)]
        shift: bool,
    },
    /// Resize observer entry for the container.
    ContainerResized { width: f64 },
    /// Window `resize`.
    WindowResized,
}

/// What the host should do with the DOM event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The engine acted on the event.
    pub handled: bool,
    /// Call `preventDefault()` on the DOM event.
    pub prevent_default: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };

    pub const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };

    pub const CONSUMED: Self = Self {
        handled: true,
        prevent_default: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_dom() {
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom("Enter"), Key::Other);
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let json = r#"[
            {"type": "pointer_down", "separator": 1},
            {"type": "pointer_move", "client_x": 420.5},
            {"type": "pointer_up"},
            {"type": "touch_move", "touches": [{"client_x": 10.0}]},
            {"type": "key_down", "separator": 0, "key": "ArrowRight", "shift": true},
            {"type": "key_down", "separator": 0, "key": "Tab"},
            {"type": "container_resized", "width": 1024.0}
        ]"#;
        let events: Vec<LayoutEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0], LayoutEvent::PointerDown { separator: 1 });
        assert_eq!(events[1], LayoutEvent::PointerMove { client_x: 420.5 });
        assert_eq!(events[2], LayoutEvent::PointerUp);
        assert_eq!(
            events[3],
            LayoutEvent::TouchMove {
                touches: vec![TouchPoint {
                    client_x: 10.0,
                    client_y: 0.0
                }]
            }
        );
        assert_eq!(
            events[4],
            LayoutEvent::KeyDown {
                separator: 0,
                key: Key::ArrowRight,
                shift: true
            }
        );
        assert_eq!(
            events[5],
            LayoutEvent::KeyDown {
                separator: 0,
                key: Key::Other,
                shift: false
            }
        );
        assert_eq!(events[6], LayoutEvent::ContainerResized { width: 1024.0 });
    }
}
