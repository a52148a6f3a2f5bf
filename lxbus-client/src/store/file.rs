//! Disk-backed stop-code store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::StopCode;

use super::LocalStore;
use super::error::StoreError;

/// On-disk document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCodes {
    stop_codes: Vec<StopCode>,
}

/// Configuration for the file store.
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Path to the store file.
    pub path: PathBuf,
}

impl FileStoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        // Default to a file in the current directory
        Self::new("stop_codes.json")
    }
}

/// Previously used stop codes, kept in a JSON file.
///
/// Every operation reads the file afresh, so several widgets sharing one
/// file see each other's additions.
#[derive(Debug, Clone)]
pub struct FileStore {
    config: FileStoreConfig,
}

impl FileStore {
    pub fn new(config: FileStoreConfig) -> Self {
        Self { config }
    }

    /// Get the store file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Load the document. A missing file is an empty store.
    fn load(&self) -> Result<StoredCodes, StoreError> {
        let contents = match std::fs::read_to_string(&self.config.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredCodes::default());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    message: format!("failed to read store file: {}", e),
                });
            }
        };

        serde_json::from_str(&contents).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })
    }

    /// Save the document.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self, stored: &StoredCodes) -> Result<(), StoreError> {
        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                message: format!("failed to create store directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(stored).map_err(|e| StoreError::Json {
            message: format!("failed to serialize store: {}", e),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| StoreError::Io {
            message: format!("failed to write store file: {}", e),
        })
    }
}

impl LocalStore for FileStore {
    fn is_available(&self) -> bool {
        true
    }

    fn list_all(&self) -> Result<Vec<StopCode>, StoreError> {
        Ok(self.load()?.stop_codes)
    }

    fn add(&mut self, code: &StopCode) -> Result<(), StoreError> {
        let mut stored = self.load()?;
        if stored.stop_codes.contains(code) {
            return Ok(());
        }
        stored.stop_codes.push(code.clone());
        self.save(&stored)
    }

    fn delete(&mut self, code: &StopCode) -> Result<(), StoreError> {
        let mut stored = self.load()?;
        let before = stored.stop_codes.len();
        stored.stop_codes.retain(|c| c != code);
        if stored.stop_codes.len() == before {
            return Ok(());
        }
        self.save(&stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn code(s: &str) -> StopCode {
        StopCode::parse(s).unwrap()
    }

    #[test]
    fn add_and_list() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(FileStoreConfig::new(dir.path().join("codes.json")));

        store.add(&code("1712")).unwrap();
        store.add(&code("9999")).unwrap();

        assert_eq!(store.list_all().unwrap(), vec![code("1712"), code("9999")]);
    }

    #[test]
    fn add_ignores_duplicates() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(FileStoreConfig::new(dir.path().join("codes.json")));

        store.add(&code("1712")).unwrap();
        store.add(&code("9999")).unwrap();
        store.add(&code("1712")).unwrap();

        assert_eq!(store.list_all().unwrap(), vec![code("1712"), code("9999")]);
    }

    #[test]
    fn delete_removes_code() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(FileStoreConfig::new(dir.path().join("codes.json")));

        store.add(&code("1712")).unwrap();
        store.add(&code("9999")).unwrap();
        store.delete(&code("9999")).unwrap();

        assert_eq!(store.list_all().unwrap(), vec![code("1712")]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("codes.json");
        let mut store = FileStore::new(FileStoreConfig::new(&path));

        store.delete(&code("1712")).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_is_empty() {
        let store = FileStore::new(FileStoreConfig::new("/nonexistent/path/codes.json"));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("codes.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(FileStoreConfig::new(&path));
        assert!(matches!(store.list_all(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("codes.json");
        let mut store = FileStore::new(FileStoreConfig::new(&path));

        store.add(&code("1712")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("codes.json");

        let mut store = FileStore::new(FileStoreConfig::new(&path));
        store.add(&code("1712")).unwrap();

        let reopened = FileStore::new(FileStoreConfig::new(&path));
        assert_eq!(reopened.list_all().unwrap(), vec![code("1712")]);
    }
}
