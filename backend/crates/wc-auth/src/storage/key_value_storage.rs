use crate::Result as AuthErrorResult;

/// String key/value store with browser local-storage semantics:
/// synchronous, last write wins, no cross-writer coordination.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> AuthErrorResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> AuthErrorResult<()>;

    /// Removing a missing key is not an error
    fn remove_item(&self, key: &str) -> AuthErrorResult<()>;
}
