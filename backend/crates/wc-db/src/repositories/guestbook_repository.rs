use crate::Result as DbErrorResult;
use crate::row;

use wc_core::GuestbookMessage;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "guestbook_messages";

const SELECT_COLUMNS: &str = r#"
    SELECT id, wedding_id, name, relationship, message, is_public, created_at
    FROM guestbook_messages
"#;

/// Guestbook messages. Every listing is newest first.
pub struct GuestbookRepository {
    pool: SqlitePool,
}

impl GuestbookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &GuestbookMessage) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO guestbook_messages (
                  id, wedding_id, name, relationship, message, is_public, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(message.id.to_string())
        .bind(&message.wedding_id)
        .bind(&message.name)
        .bind(&message.relationship)
        .bind(&message.message)
        .bind(message.is_public)
        .bind(message.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Public and private messages stored under `wedding_id`
    pub async fn find_by_wedding(&self, wedding_id: &str) -> DbErrorResult<Vec<GuestbookMessage>> {
        let sql = format!(
            "{} WHERE wedding_id = ? ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(wedding_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_message).collect()
    }

    /// Public messages across every wedding, for the landing page
    pub async fn find_public(&self) -> DbErrorResult<Vec<GuestbookMessage>> {
        let sql = format!(
            "{} WHERE is_public = 1 ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(map_message).collect()
    }

    pub async fn find_private(&self, wedding_id: &str) -> DbErrorResult<Vec<GuestbookMessage>> {
        let sql = format!(
            "{} WHERE wedding_id = ? AND is_public = 0 ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(wedding_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_message).collect()
    }
}

fn map_message(r: &SqliteRow) -> DbErrorResult<GuestbookMessage> {
    Ok(GuestbookMessage {
        id: row::uuid(TABLE, &r.try_get::<String, _>("id")?)?,
        wedding_id: r.try_get("wedding_id")?,
        name: r.try_get("name")?,
        relationship: r.try_get("relationship")?,
        message: r.try_get("message")?,
        is_public: r.try_get("is_public")?,
        created_at: row::timestamp(TABLE, r.try_get("created_at")?)?,
    })
}
