use crate::Result as DbErrorResult;
use crate::repositories::user_repository::map_user;
use crate::row;

use wc_core::{Session, User};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "sessions";

/// Persisted login sessions. Sessions never expire; they end on logout.
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &Session) -> DbErrorResult<()> {
        Self::insert(&self.pool, session).await
    }

    pub async fn insert<'e, E>(executor: E, session: &Session) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO sessions (session_id, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&session.session_id)
            .bind(session.user_id.to_string())
            .bind(session.created_at.timestamp_millis())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find(&self, session_id: &str) -> DbErrorResult<Option<Session>> {
        let row = sqlx::query(
            "SELECT session_id, user_id, created_at FROM sessions WHERE session_id = ?",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_session(&r)).transpose()
    }

    /// The user a session belongs to, if the session exists
    pub async fn find_user(&self, session_id: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT u.id, u.username, u.password_hash, u.created_at
              FROM sessions s
              JOIN users u ON u.id = s.user_id
              WHERE s.session_id = ?
              "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    /// Remove a session. Returns false if it did not exist.
    pub async fn delete(&self, session_id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_session(r: &SqliteRow) -> DbErrorResult<Session> {
    Ok(Session {
        session_id: r.try_get("session_id")?,
        user_id: row::uuid(TABLE, &r.try_get::<String, _>("user_id")?)?,
        created_at: row::timestamp(TABLE, r.try_get("created_at")?)?,
    })
}
