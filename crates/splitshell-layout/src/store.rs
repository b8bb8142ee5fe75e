//! Key-value persistence for layout ratios.
//!
//! The store is the only state shared between engine instances. Writes are
//! last-write-wins with no locking; readers validate what they find and
//! treat anything unusable as absent.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use splitshell_common::StoreError;
use tracing::{debug, warn};

/// String key-value storage (`localStorage` semantics).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: u64,
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total `set` and `remove` calls across all clones.
    pub fn write_count(&self) -> u64 {
        self.inner.borrow().writes
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.borrow().entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.remove(key);
        inner.writes += 1;
        Ok(())
    }
}

/// Decode a persisted ratio vector.
///
/// Returns `None` for malformed JSON, a length other than `expected_len`,
/// non-finite or negative entries, or an all-zero vector.
pub fn decode_ratios(raw: &str, expected_len: usize) -> Option<Vec<f64>> {
    let ratios: Vec<f64> = match serde_json::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            debug!("persisted ratios are not a JSON number array: {e}");
            return None;
        }
    };
    if ratios.len() != expected_len {
        debug!(
            "persisted ratios have length {}, expected {expected_len}",
            ratios.len()
        );
        return None;
    }
    if ratios.iter().any(|r| !r.is_finite() || *r < 0.0) {
        return None;
    }
    if ratios.iter().sum::<f64>() <= 0.0 {
        return None;
    }
    Some(ratios)
}

/// Read the ratios stored under `key`, or `None` if absent or unusable.
pub fn load_ratios(store: &dyn KeyValueStore, key: &str, expected_len: usize) -> Option<Vec<f64>> {
    match store.get(key) {
        Ok(Some(raw)) => {
            let ratios = decode_ratios(&raw, expected_len);
            if ratios.is_none() {
                warn!("discarding persisted layout '{key}': {raw}");
            }
            ratios
        }
        Ok(None) => None,
        Err(e) => {
            warn!("failed to read persisted layout '{key}': {e}");
            None
        }
    }
}

/// Write `ratios` under `key`. Failures are logged, never propagated.
pub fn save_ratios(store: &mut dyn KeyValueStore, key: &str, ratios: &[f64]) {
    let encoded = match serde_json::to_string(ratios) {
        Ok(s) => s,
        Err(e) => {
            warn!("failed to encode layout '{key}': {e}");
            return;
        }
    };
    if let Err(e) = store.set(key, &encoded) {
        warn!("failed to persist layout '{key}': {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let mut a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(b.write_count(), 1);
    }

    #[test]
    fn remove_deletes_entry() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn decode_accepts_matching_vector() {
        assert_eq!(decode_ratios("[0.2,0.3,0.5]", 3), Some(vec![0.2, 0.3, 0.5]));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(decode_ratios("[0.5,0.5]", 3), None);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode_ratios("not json", 2), None);
        assert_eq!(decode_ratios("{\"a\":1}", 2), None);
        assert_eq!(decode_ratios("[\"0.5\",\"0.5\"]", 2), None);
    }

    #[test]
    fn decode_rejects_negative_and_zero_sum() {
        assert_eq!(decode_ratios("[-0.5,1.5]", 2), None);
        assert_eq!(decode_ratios("[0,0]", 2), None);
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        save_ratios(&mut store, "split-layout:main", &[0.25, 0.75]);
        assert_eq!(
            load_ratios(&store, "split-layout:main", 2),
            Some(vec![0.25, 0.75])
        );
        assert_eq!(load_ratios(&store, "split-layout:main", 3), None);
        assert_eq!(load_ratios(&store, "split-layout:other", 2), None);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("private mode".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("private mode".into()))
        }
    }

    #[test]
    fn store_failures_are_swallowed() {
        let mut store = BrokenStore;
        assert_eq!(load_ratios(&store, "k", 2), None);
        save_ratios(&mut store, "k", &[0.5, 0.5]);
    }
}
