//! Session state kept in the local storage file.
//!
//! Online logins remember the server's session ID under [`SESSION_KEY`]. In
//! offline demo mode the same file also holds the naive credential store, so
//! both modes agree on who is logged in.

use crate::CliClientResult;

use serde_json::{Value, json};
use wc_auth::{CURRENT_USER_KEY, CredentialStore, KeyValueStorage};

/// Storage key holding the session ID of the last login
pub const SESSION_KEY: &str = "session_id";

pub struct LocalSession<S: KeyValueStorage> {
    store: CredentialStore<S>,
}

impl<S: KeyValueStorage> LocalSession<S> {
    pub fn new(storage: S) -> Self {
        Self::with_store(CredentialStore::new(storage))
    }

    pub fn with_store(store: CredentialStore<S>) -> Self {
        Self { store }
    }

    pub fn session_id(&self) -> CliClientResult<Option<String>> {
        Ok(self.store.storage().get_item(SESSION_KEY)?)
    }

    /// Record a login, replacing whatever session was there
    pub fn remember(&self, username: &str, session_id: &str) -> CliClientResult<()> {
        let storage = self.store.storage();
        storage.set_item(SESSION_KEY, session_id)?;
        storage.set_item(CURRENT_USER_KEY, username)?;
        Ok(())
    }

    /// Forget the session. Safe to call when already logged out.
    pub fn forget(&self) -> CliClientResult<()> {
        self.store.logout()?;
        self.store.storage().remove_item(SESSION_KEY)?;
        Ok(())
    }

    // =========================================================================
    // Offline demo mode
    // =========================================================================

    pub fn register(&self, username: &str, password: &str) -> CliClientResult<Value> {
        let success = self.store.register(username, password)?;
        self.store.storage().set_item(SESSION_KEY, &success.session_id)?;
        Ok(offline(json!(success)))
    }

    pub fn login(&self, username: &str, password: &str) -> CliClientResult<Value> {
        let success = self.store.login(username, password)?;
        self.store.storage().set_item(SESSION_KEY, &success.session_id)?;
        Ok(offline(json!(success)))
    }

    pub fn logout(&self) -> CliClientResult<Value> {
        self.forget()?;
        Ok(offline(json!({ "success": true })))
    }

    pub fn whoami(&self) -> CliClientResult<Value> {
        let username = self.store.current_user()?;
        Ok(offline(json!({
            "logged_in": username.is_some(),
            "username": username,
        })))
    }

    pub fn users(&self) -> CliClientResult<Value> {
        let users = self.store.all_users()?;
        Ok(offline(json!({
            "scheme": self.store.scheme().as_str(),
            "users": users,
        })))
    }
}

/// Tag a response as served by the local store
fn offline(mut value: Value) -> Value {
    if let Value::Object(ref mut map) = value {
        map.insert("mode".to_string(), json!("offline"));
    }
    value
}
