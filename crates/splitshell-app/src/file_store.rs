//! JSON-file key-value store standing in for browser `localStorage`.
//!
//! The file holds one JSON object of string entries. Every operation reads
//! the file fresh, and writes replace it atomically, so several processes
//! sharing one file only race on the key they both write.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use splitshell_common::StoreError;
use splitshell_layout::KeyValueStore;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/splitshell/storage.json`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("could not determine data directory".into()))?;
        Ok(dir.join("splitshell").join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current entries. A missing file is empty; so is one that does not
    /// parse, which is logged and replaced by the next write.
    fn read(&self) -> Result<Entries, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("discarding unreadable store {}: {e}", self.path.display());
                Ok(Entries::new())
            }
        }
    }

    fn write(&self, entries: &Entries) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        debug!("wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}
