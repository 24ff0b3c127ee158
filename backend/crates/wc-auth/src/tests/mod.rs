mod password;

use crate::{CredentialStore, MemoryStorage, PasswordScheme};

/// Plaintext keeps tests fast; Argon2 is covered separately
pub(crate) fn plaintext_store() -> CredentialStore<MemoryStorage> {
    CredentialStore::with_scheme(MemoryStorage::new(), PasswordScheme::Plaintext)
}
