//! Local storage persisted as a single JSON object on disk.
//!
//! Every call re-reads the file, so separate processes observe each
//! other's writes, but concurrent writers race with last write wins.

use crate::{AuthError, KeyValueStorage, Result as AuthErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;

pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[track_caller]
    fn read_all(&self) -> AuthErrorResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| AuthError::Storage {
            message: format!("failed to read {}: {}", self.path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| AuthError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn write_all(&self, items: &BTreeMap<String, String>) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| AuthError::Storage {
                message: format!("failed to create {}: {}", parent.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let json = serde_json::to_string_pretty(items).map_err(|source| {
            AuthError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        // Readers never observe a partially written file
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|e| AuthError::Storage {
            message: format!("failed to write {}: {}", tmp_path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::rename(&tmp_path, &self.path).map_err(|e| AuthError::Storage {
            message: format!("failed to replace {}: {}", self.path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> AuthErrorResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> AuthErrorResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> AuthErrorResult<()> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
