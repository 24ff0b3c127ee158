//! Local credential store for offline and demo use.
//!
//! Keeps a username to password mapping and a single "current user" marker in
//! a [`KeyValueStorage`]. There is one active session per storage: logging in
//! as someone else silently replaces the marker. Sessions never expire and
//! nothing on a server ever validates them.
//!
//! The first operation that reads the mapping seeds three demo accounts if the
//! mapping has never been written. Once written it is never re-seeded, even if
//! every account were removed by hand.

use crate::{
    AuthError, AuthSuccess, KeyValueStorage, PasswordScheme, Result as AuthErrorResult,
    generate_local_session_id,
};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info, warn};

/// Storage key holding the JSON object of username to stored password
pub const USERS_KEY: &str = "simple_wedding_users";

/// Storage key holding the logged-in username
pub const CURRENT_USER_KEY: &str = "current_wedding_user";

/// Demo accounts seeded on first use
pub const SEED_ACCOUNTS: [(&str, &str); 3] = [
    ("prasanna", "password123"),
    ("testuser", "password123"),
    ("debuguser", "test123"),
];

pub struct CredentialStore<S: KeyValueStorage> {
    storage: S,
    scheme: PasswordScheme,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    /// Store with salted Argon2id hashing
    pub fn new(storage: S) -> Self {
        Self::with_scheme(storage, PasswordScheme::default())
    }

    pub fn with_scheme(storage: S, scheme: PasswordScheme) -> Self {
        Self { storage, scheme }
    }

    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create an account and log it in.
    ///
    /// No constraints are placed on either value; empty strings are accepted.
    /// Fails with [`AuthError::DuplicateUsername`] and leaves the mapping
    /// untouched if the username is taken.
    #[track_caller]
    pub fn register(&self, username: &str, password: &str) -> AuthErrorResult<AuthSuccess> {
        let mut users = self.users()?;

        if users.contains_key(username) {
            return Err(AuthError::DuplicateUsername {
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        users.insert(username.to_string(), self.scheme.protect(password)?);
        self.save_users(&users)?;
        self.storage.set_item(CURRENT_USER_KEY, username)?;

        info!("Registered local account '{}'", username);
        Ok(AuthSuccess::new(username, generate_local_session_id()))
    }

    /// Check credentials and replace the current session marker on success
    #[track_caller]
    pub fn login(&self, username: &str, password: &str) -> AuthErrorResult<AuthSuccess> {
        let users = self.users()?;

        let matched = match users.get(username) {
            Some(stored) => self.scheme.matches(password, stored)?,
            None => false,
        };

        if !matched {
            debug!("Local login rejected for '{}'", username);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.storage.set_item(CURRENT_USER_KEY, username)?;

        info!("Local login for '{}'", username);
        Ok(AuthSuccess::new(username, generate_local_session_id()))
    }

    pub fn is_logged_in(&self) -> AuthErrorResult<bool> {
        Ok(self.storage.get_item(CURRENT_USER_KEY)?.is_some())
    }

    pub fn current_user(&self) -> AuthErrorResult<Option<String>> {
        self.storage.get_item(CURRENT_USER_KEY)
    }

    /// Clear the session marker. Logging out twice is fine.
    pub fn logout(&self) -> AuthErrorResult<()> {
        self.storage.remove_item(CURRENT_USER_KEY)
    }

    /// Full mapping of usernames to stored passwords, unredacted.
    /// Debugging aid only; never expose this outside a developer tool.
    pub fn all_users(&self) -> AuthErrorResult<BTreeMap<String, String>> {
        warn!("Dumping all local credentials (debug only)");
        self.users()
    }

    /// Load the mapping, seeding demo accounts if it was never written
    fn users(&self) -> AuthErrorResult<BTreeMap<String, String>> {
        match self.storage.get_item(USERS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| AuthError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => self.seed(),
        }
    }

    fn seed(&self) -> AuthErrorResult<BTreeMap<String, String>> {
        let mut users = BTreeMap::new();
        for (username, password) in SEED_ACCOUNTS {
            users.insert(username.to_string(), self.scheme.protect(password)?);
        }

        self.save_users(&users)?;
        info!("Seeded {} demo accounts", users.len());
        Ok(users)
    }

    fn save_users(&self, users: &BTreeMap<String, String>) -> AuthErrorResult<()> {
        let json = serde_json::to_string(users).map_err(|source| AuthError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.storage.set_item(USERS_KEY, &json)
    }
}
