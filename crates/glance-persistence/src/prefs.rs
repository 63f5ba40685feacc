//! JSON file-backed key-value store.

use crate::error::PersistenceResult;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// String key-value store persisted as a single JSON object.
///
/// The file is read once at load; every `set` rewrites it. Clones
/// share the same in-memory map and backing file.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl PrefStore {
    /// Load the store from `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), entries = values.len(), "Preference store loaded");
        Ok(Self {
            path,
            values: Arc::new(Mutex::new(values)),
        })
    }

    /// Read a value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    /// Write a value through to the backing file.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> PersistenceResult<()> {
        let mut values = self.values.lock();
        values.insert(key.into(), value.into());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&*values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
