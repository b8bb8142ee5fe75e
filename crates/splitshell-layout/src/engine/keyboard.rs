use tracing::debug;

use crate::host::Host;
use crate::input::{EventResponse, Key};
use crate::ratios::keyboard_pair;
use crate::store::KeyValueStore;

use super::SplitLayout;

impl<H: Host, S: KeyValueStore> SplitLayout<H, S> {
    /// Arrow keys on a focused separator move it by the small step, or the
    /// large step with Shift held. Steps that change nothing are ignored so
    /// the browser keeps its default handling.
    pub(super) fn key_step(&mut self, separator: usize, key: Key, shift: bool) -> EventResponse {
        if separator >= self.separator_nodes.len() || !self.separator_visible(separator) {
            return EventResponse::IGNORED;
        }
        let direction = match key {
            Key::ArrowLeft => -1.0,
            Key::ArrowRight => 1.0,
            Key::Other => return EventResponse::IGNORED,
        };
        if let Err(rejection) = self.machine.step(separator) {
            debug!("key step ignored: {rejection}");
            return EventResponse::IGNORED;
        }

        let step = if shift {
            self.config.large_step
        } else {
            self.config.small_step
        };
        let settled = self.settled_ratios();
        let Some((left, right)) = keyboard_pair(
            &settled,
            &self.panels,
            separator,
            direction * step,
            self.config.keyboard_policy,
        ) else {
            return EventResponse::IGNORED;
        };

        self.ratios = settled;
        self.ratios[separator] = left;
        self.ratios[separator + 1] = right;
        self.persist();
        self.schedule_render();
        debug!("separator {separator} stepped to {left:.3}/{right:.3}");
        EventResponse::CONSUMED
    }
}
