//! Light/dark theme selection persisted across page loads.

use splitshell_config::ThemeConfig;
use splitshell_layout::{Document, KeyValueStore};
use tracing::{debug, warn};

/// Applies the selected theme as an attribute on the document element and
/// remembers it in the key-value store.
pub struct ThemeManager<D: Document, S: KeyValueStore> {
    document: D,
    store: S,
    config: ThemeConfig,
    current: String,
}

impl<D: Document, S: KeyValueStore> ThemeManager<D, S> {
    pub fn new(document: D, store: S, config: &ThemeConfig) -> Self {
        Self {
            document,
            store,
            config: config.clone(),
            current: config.default_theme.clone(),
        }
    }

    /// Apply the stored theme, or the default when none is stored or the
    /// store cannot be read. Returns the applied theme.
    pub fn init(&mut self) -> &str {
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(value) => value.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("failed to read theme: {e}");
                None
            }
        };
        self.current = stored.unwrap_or_else(|| self.config.default_theme.clone());
        self.apply();
        debug!("theme initialised to '{}'", self.current);
        &self.current
    }

    /// Persist and apply `theme`. A failed write is logged and the theme
    /// still applies for this page.
    pub fn set(&mut self, theme: &str) {
        if let Err(e) = self.store.set(&self.config.storage_key, theme) {
            warn!("failed to persist theme '{theme}': {e}");
        }
        self.current = theme.to_string();
        self.apply();
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    fn apply(&mut self) {
        let root = self.document.document_element();
        self.document
            .set_attribute(root, &self.config.attribute, &self.current);
    }
}
