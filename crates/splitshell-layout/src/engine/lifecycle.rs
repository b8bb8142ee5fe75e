//! Event dispatch, frame scheduling, resize handling and disposal.

use tracing::{debug, info};

use crate::host::{FrameHandle, Host};
use crate::input::{EventResponse, LayoutEvent};
use crate::machine::DragSource;
use crate::store::KeyValueStore;

use super::SplitLayout;

impl<H: Host, S: KeyValueStore> SplitLayout<H, S> {
    /// Route one host event. After disposal every event is ignored.
    pub fn handle(&mut self, event: LayoutEvent) -> EventResponse {
        if self.disposed {
            return EventResponse::IGNORED;
        }
        match event {
            LayoutEvent::PointerDown { separator } => {
                self.drag_start(separator, DragSource::Pointer)
            }
            LayoutEvent::PointerMove { client_x } => self.drag_move(client_x, DragSource::Pointer),
            LayoutEvent::PointerUp => self.drag_end(DragSource::Pointer),
            LayoutEvent::TouchStart { separator } => self.drag_start(separator, DragSource::Touch),
            LayoutEvent::TouchMove { touches } => {
                let Some(primary) = touches.first() else {
                    return EventResponse::IGNORED;
                };
                let rect = self.host.bounding_rect(self.container);
                if !rect.contains_x(primary.client_x) {
                    debug!(
                        "touch at x={} left the container, ignoring",
                        primary.client_x
                    );
                    return EventResponse::IGNORED;
                }
                self.drag_move(primary.client_x, DragSource::Touch)
            }
            LayoutEvent::TouchEnd | LayoutEvent::TouchCancel => self.drag_end(DragSource::Touch),
            LayoutEvent::KeyDown {
                separator,
                key,
                shift,
            } => self.key_step(separator, key, shift),
            LayoutEvent::ContainerResized { width } => self.container_resized(width),
            LayoutEvent::WindowResized => {
                self.machine.resize();
                self.needs_measure = true;
                self.schedule_render();
                EventResponse::HANDLED
            }
        }
    }

    /// Paint the latest state for a frame this layout requested.
    ///
    /// Stale handles and frames arriving after disposal are ignored.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) {
        if self.disposed || self.pending_frame != Some(handle) {
            return;
        }
        self.pending_frame = None;
        if self.needs_measure {
            self.needs_measure = false;
            let rect = self.host.bounding_rect(self.container);
            self.container_width = self.track_width(rect.width);
        }
        self.update_layout();
    }

    /// Schedule a render for the next frame. Requests made while one is
    /// pending coalesce into it.
    pub fn request_layout(&mut self) {
        self.schedule_render();
    }

    pub(super) fn schedule_render(&mut self) {
        if self.disposed || self.pending_frame.is_some() {
            return;
        }
        self.pending_frame = Some(self.host.request_frame());
    }

    fn container_resized(&mut self, width: f64) -> EventResponse {
        self.machine.resize();
        let track = self.track_width(width);
        if (track - self.container_width).abs() < f64::EPSILON {
            return EventResponse::HANDLED;
        }
        debug!("container resized: track {} -> {track}", self.container_width);
        self.container_width = track;
        self.schedule_render();
        EventResponse::HANDLED
    }

    /// Remove every listener and the resize observer, cancel the pending
    /// frame and end any drag. Idempotent; never writes the store.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(separator) = self.machine.cancel() {
            self.restore_drag_visuals(separator);
        }
        for id in self.drag_listeners.drain(..) {
            self.host.remove_listener(id);
        }
        for id in self.static_listeners.drain(..) {
            self.host.remove_listener(id);
        }
        if let Some(observer) = self.observer.take() {
            self.host.disconnect(observer);
        }
        if let Some(frame) = self.pending_frame.take() {
            self.host.cancel_frame(frame);
        }
        info!(container = self.container_id.as_str(), "split layout disposed");
    }
}
