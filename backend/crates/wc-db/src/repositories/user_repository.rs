use crate::Result as DbErrorResult;
use crate::row;

use wc_core::User;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A taken username surfaces as a unique violation.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        Self::insert(&self.pool, user).await
    }

    /// `create` against any executor, so callers can run it inside a transaction
    pub async fn insert<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO users (id, username, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Insert unless the username already exists. Returns true if inserted.
    pub async fn create_if_absent(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO users (id, username, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, username, password_hash, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, username, password_hash, created_at
              FROM users
              WHERE username = ?
              "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }
}

pub(crate) fn map_user(r: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: row::uuid(TABLE, &r.try_get::<String, _>("id")?)?,
        username: r.try_get("username")?,
        password_hash: r.try_get("password_hash")?,
        created_at: row::timestamp(TABLE, r.try_get("created_at")?)?,
    })
}
