use crate::error::Result as ServerErrorResult;

use wc_auth::{SEED_ACCOUNTS, hash_password};
use wc_core::{User, Wedding, starter_content};
use wc_db::{UserRepository, WeddingRepository};

use sqlx::SqlitePool;

/// Create the demo accounts that do not exist yet, each with a starter
/// wedding page. Existing accounts are left alone. Returns how many were created.
pub async fn ensure_demo_accounts(pool: &SqlitePool) -> ServerErrorResult<usize> {
    let users = UserRepository::new(pool.clone());
    let weddings = WeddingRepository::new(pool.clone());
    let mut created = 0;

    for (username, password) in SEED_ACCOUNTS {
        if users.find_by_username(username).await?.is_some() {
            continue;
        }

        let user = User::new(username.to_string(), hash_password(password)?);
        if !users.create_if_absent(&user).await? {
            continue;
        }

        weddings
            .create(&Wedding::new(user.id, starter_content()))
            .await?;
        created += 1;
    }

    if created > 0 {
        log::warn!(
            "Created {} demo account(s) with well-known passwords; disable auth.demo_accounts outside development",
            created
        );
    }

    Ok(created)
}
