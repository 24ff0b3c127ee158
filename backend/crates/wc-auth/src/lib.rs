pub mod auth_success;
pub mod credential_store;
pub mod error;
pub mod login_rate_limiter;
pub mod password;
pub mod password_scheme;
pub mod rate_limit_config;
pub mod session_id;
pub mod storage;

pub use auth_success::AuthSuccess;
pub use credential_store::{CURRENT_USER_KEY, CredentialStore, SEED_ACCOUNTS, USERS_KEY};
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
pub use password_scheme::PasswordScheme;
pub use rate_limit_config::RateLimitConfig;
pub use session_id::generate_local_session_id;
pub use storage::file_storage::FileStorage;
pub use storage::key_value_storage::KeyValueStorage;
pub use storage::memory_storage::MemoryStorage;

#[cfg(test)]
mod tests;
