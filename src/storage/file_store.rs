use std::path::{Path, PathBuf};

use super::{ensure_dir, write_atomic, KeyValueStore, Result};
use crate::config;

/// File-per-key backend rooted at a data directory. Values are written
/// atomically so an interrupted save never corrupts the stored state.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// Opens the backend under the resolved application data directory.
    pub fn open_default() -> Result<Self> {
        Self::new(config::data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.key_path(key), value)
    }
}
