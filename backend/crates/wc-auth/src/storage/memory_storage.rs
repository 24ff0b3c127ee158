use crate::{AuthError, KeyValueStorage, Result as AuthErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard};

use error_location::ErrorLocation;

/// Process-local storage. Clones share the same underlying map,
/// like two tabs of one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn items(&self) -> AuthErrorResult<MutexGuard<'_, HashMap<String, String>>> {
        self.items.lock().map_err(|e| AuthError::Storage {
            message: format!("memory storage lock poisoned: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AuthErrorResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AuthErrorResult<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AuthErrorResult<()> {
        self.items()?.remove(key);
        Ok(())
    }
}
