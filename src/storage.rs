//! Durable string key-value slots for user preferences.
//!
//! The language context persists one key through this trait. `MemoryStore`
//! backs tests and ephemeral sessions, `FileStore` keeps a flat JSON object
//! on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("preference storage is unavailable")]
    Unavailable,
}

/// A durable string store, in the manner of a browser's local storage.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`. Absent keys yield `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-memory store. Survives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let values = self.values.lock().map_err(|_| PersistenceError::Unavailable)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut values = self.values.lock().map_err(|_| PersistenceError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON file holding a flat object of string values.
///
/// The file is created on first write. Writes are serialized through an
/// internal lock so concurrent setters cannot interleave read-modify-write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next contents are written to before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<HashMap<String, String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let _guard = self.lock.lock().map_err(|_| PersistenceError::Unavailable)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().map_err(|_| PersistenceError::Unavailable)?;
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Replace by rename so a crash mid-write never leaves a torn file
        let staging = self.staging_path();
        std::fs::write(&staging, serde_json::to_string_pretty(&values)?)?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
