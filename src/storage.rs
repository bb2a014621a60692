//! Key/value preference storage (the browser's local storage).

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// Errors raised by a [`PreferenceStorage`] backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// The preference file could not be read or written
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file is not a JSON object of strings
    #[error("Failed to parse preference file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// String-valued persistent storage.
pub trait PreferenceStorage {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage that lives as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    /// Stored values by key.
    values: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object file.
///
/// A missing file reads as empty; every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// The JSON file holding all values.
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored value; empty when the file does not exist yet.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        tracing::debug!(key, value, path = ?self.path, "Stored preference");
        Ok(())
    }
}
