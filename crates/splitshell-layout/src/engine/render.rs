//! Painting ratios into panel widths.

use tracing::debug;

use crate::host::Host;
use crate::ratios::pixel_widths;
use crate::store::KeyValueStore;

use super::SplitLayout;

impl<H: Host, S: KeyValueStore> SplitLayout<H, S> {
    /// Write panel widths, separator visibility and aria values for the
    /// current ratios, then persist them.
    ///
    /// Returns `false` without touching anything when disposed or before
    /// the track has a positive width.
    pub fn update_layout(&mut self) -> bool {
        if self.disposed || self.container_width <= 0.0 {
            return false;
        }
        let rendered = self.rendered_ratios();
        let widths = pixel_widths(&rendered, self.container_width);

        for (i, &node) in self.panel_nodes.iter().enumerate() {
            if self.hidden[i] {
                self.host.set_style(node, "display", "none");
                self.host.set_style(node, "width", "0px");
            } else {
                self.host.remove_style(node, "display");
                self.host.set_style(node, "width", &format!("{}px", widths[i]));
            }
        }
        for k in 0..self.separator_nodes.len() {
            let node = self.separator_nodes[k];
            if self.separator_visible(k) {
                self.host.remove_style(node, "display");
            } else {
                self.host.set_style(node, "display", "none");
            }
        }
        self.update_separator_aria(&rendered);
        self.persist();

        debug!(
            container = self.container_id.as_str(),
            "rendered widths {widths:?} on track {}",
            self.container_width
        );
        true
    }
}
