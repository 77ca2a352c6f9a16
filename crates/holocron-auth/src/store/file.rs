//! JSON-file token store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::TokenStore;
use crate::error::{Error, Result};

/// Token store persisted as a flat JSON object on disk.
///
/// The whole file is rewritten on every change. A missing file reads as an
/// empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing contents.
    ///
    /// A file that is not a JSON object of strings is treated like a lapsed
    /// session: the store starts empty and the next write replaces the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).unwrap_or_else(|e| {
                    warn!("Discarding unreadable token store {}: {e}", path.display());
                    BTreeMap::new()
                })
            }
        } else {
            debug!("No token store at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).inspect_err(|e| {
            warn!("Failed to write token store {}: {e}", self.path.display());
        })?;
        Ok(())
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(Error::store)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(Error::store)?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        debug!("Stored {key} in {}", self.path.display());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(Error::store)?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
            debug!("Deleted {key} from {}", self.path.display());
        }
        Ok(())
    }
}
