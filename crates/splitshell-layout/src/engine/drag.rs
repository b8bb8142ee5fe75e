//! Pointer and touch drag handling for separators.

use tracing::debug;

use crate::host::{Host, ListenerKind, ListenerTarget};
use crate::input::EventResponse;
use crate::machine::{DragSource, Transition};
use crate::ratios::{changed_beyond, drag_pair};
use crate::store::KeyValueStore;

use super::SplitLayout;

impl<H: Host, S: KeyValueStore> SplitLayout<H, S> {
    pub(super) fn drag_start(&mut self, separator: usize, source: DragSource) -> EventResponse {
        if separator >= self.separator_nodes.len() || !self.separator_visible(separator) {
            return EventResponse::IGNORED;
        }
        if let Err(rejection) = self.machine.start(separator, source) {
            debug!("drag start ignored: {rejection}");
            return EventResponse::IGNORED;
        }

        // Drag math assumes a settled vector: visible ratios summing to 1.
        self.ratios = self.settled_ratios();

        let node = self.separator_nodes[separator];
        self.host.add_class(node, "dragging");
        let body = self.host.body();
        self.host.set_style(body, "cursor", "col-resize");
        self.host.set_style(body, "user-select", "none");

        let kinds: &[ListenerKind] = match source {
            DragSource::Pointer => &[ListenerKind::PointerMove, ListenerKind::PointerUp],
            DragSource::Touch => &[
                ListenerKind::TouchMove,
                ListenerKind::TouchEnd,
                ListenerKind::TouchCancel,
            ],
        };
        for &kind in kinds {
            let id = self.host.add_listener(ListenerTarget::Document, kind);
            self.drag_listeners.push(id);
        }

        debug!("drag started on separator {separator} ({source:?})");
        EventResponse::CONSUMED
    }

    pub(super) fn drag_move(&mut self, client_x: f64, source: DragSource) -> EventResponse {
        let separator = match self.machine.drag_move(source) {
            Ok(Transition::Moved { separator }) => separator,
            _ => return EventResponse::IGNORED,
        };

        let rect = self.host.bounding_rect(self.container);
        let track = self.track_width(rect.width);
        if track <= 0.0 {
            return EventResponse::HANDLED;
        }
        let separator_px = self.config.separator_width as f64;
        let before = self.visible_separator_count(separator) as f64 * separator_px;
        let offset = client_x - rect.left() - before - separator_px / 2.0;
        let boundary = offset / track;

        let Some((left, right)) =
            drag_pair(&self.ratios, &self.panels, &self.hidden, separator, boundary)
        else {
            return EventResponse::HANDLED;
        };

        let mut next = self.ratios.clone();
        next[separator] = left;
        next[separator + 1] = right;
        if !changed_beyond(&self.ratios, &next, self.config.drag_epsilon) {
            return EventResponse::HANDLED;
        }

        self.ratios = next;
        self.schedule_render();
        EventResponse::CONSUMED
    }

    pub(super) fn drag_end(&mut self, source: DragSource) -> EventResponse {
        let separator = match self.machine.end(source) {
            Ok(Transition::Ended { separator }) => separator,
            _ => return EventResponse::IGNORED,
        };
        self.restore_drag_visuals(separator);
        self.persist();
        self.schedule_render();
        debug!("drag ended on separator {separator}");
        EventResponse::HANDLED
    }

    /// Undo the visual state applied for a drag and drop its document
    /// listeners.
    pub(super) fn restore_drag_visuals(&mut self, separator: usize) {
        if let Some(&node) = self.separator_nodes.get(separator) {
            self.host.remove_class(node, "dragging");
        }
        let body = self.host.body();
        self.host.remove_style(body, "cursor");
        self.host.remove_style(body, "user-select");
        for id in self.drag_listeners.drain(..) {
            self.host.remove_listener(id);
        }
    }
}
