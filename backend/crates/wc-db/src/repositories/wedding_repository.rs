use crate::Result as DbErrorResult;
use crate::row;

use wc_core::{Theme, Wedding, WeddingContent};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "weddings";

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, shareable_id, couple_name_1, couple_name_2, wedding_date,
           venue_name, venue_location, their_story, theme, sections_json,
           honeymoon_fund_json, created_at, updated_at
    FROM weddings
"#;

pub struct WeddingRepository {
    pool: SqlitePool,
}

impl WeddingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a wedding. A second wedding for the same user, or a shareable
    /// ID collision, surfaces as a unique violation.
    pub async fn create(&self, wedding: &Wedding) -> DbErrorResult<()> {
        Self::insert(&self.pool, wedding).await
    }

    pub async fn insert<'e, E>(executor: E, wedding: &Wedding) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let content = &wedding.content;
        let sections_json = row::to_json("wedding sections", &content.sections)?;
        let honeymoon_fund_json = row::to_json("honeymoon fund", &content.honeymoon_fund)?;

        sqlx::query(
            r#"
              INSERT INTO weddings (
                  id, user_id, shareable_id, couple_name_1, couple_name_2, wedding_date,
                  venue_name, venue_location, their_story, theme, sections_json,
                  honeymoon_fund_json, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(wedding.id.to_string())
        .bind(wedding.user_id.to_string())
        .bind(&wedding.shareable_id)
        .bind(&content.couple_name_1)
        .bind(&content.couple_name_2)
        .bind(&content.wedding_date)
        .bind(&content.venue_name)
        .bind(&content.venue_location)
        .bind(&content.their_story)
        .bind(content.theme.as_str())
        .bind(sections_json)
        .bind(honeymoon_fund_json)
        .bind(wedding.created_at.timestamp_millis())
        .bind(wedding.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Overwrite content and `updated_at`. Identity columns never change.
    /// Returns false if the wedding does not exist.
    pub async fn update(&self, wedding: &Wedding) -> DbErrorResult<bool> {
        let content = &wedding.content;
        let sections_json = row::to_json("wedding sections", &content.sections)?;
        let honeymoon_fund_json = row::to_json("honeymoon fund", &content.honeymoon_fund)?;

        let result = sqlx::query(
            r#"
              UPDATE weddings
              SET couple_name_1 = ?, couple_name_2 = ?, wedding_date = ?,
                  venue_name = ?, venue_location = ?, their_story = ?, theme = ?,
                  sections_json = ?, honeymoon_fund_json = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&content.couple_name_1)
        .bind(&content.couple_name_2)
        .bind(&content.wedding_date)
        .bind(&content.venue_name)
        .bind(&content.venue_location)
        .bind(&content.their_story)
        .bind(content.theme.as_str())
        .bind(sections_json)
        .bind(honeymoon_fund_json)
        .bind(wedding.updated_at.timestamp_millis())
        .bind(wedding.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Wedding>> {
        self.find_one("WHERE id = ?", id.to_string()).await
    }

    pub async fn find_by_shareable_id(&self, shareable_id: &str) -> DbErrorResult<Option<Wedding>> {
        self.find_one("WHERE shareable_id = ?", shareable_id.to_string())
            .await
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<Wedding>> {
        self.find_one("WHERE user_id = ?", user_id.to_string()).await
    }

    /// Public pages accept either identifier form: try the wedding ID first,
    /// then the shareable ID.
    pub async fn find_by_any_id(&self, id_or_shareable: &str) -> DbErrorResult<Option<Wedding>> {
        if let Ok(id) = Uuid::parse_str(id_or_shareable)
            && let Some(wedding) = self.find_by_id(id).await?
        {
            return Ok(Some(wedding));
        }

        self.find_by_shareable_id(id_or_shareable).await
    }

    async fn find_one(&self, filter: &str, value: String) -> DbErrorResult<Option<Wedding>> {
        let sql = format!("{} {}", SELECT_COLUMNS, filter);
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_wedding(&r)).transpose()
    }
}

fn map_wedding(r: &SqliteRow) -> DbErrorResult<Wedding> {
    let theme: Theme = row::parse(TABLE, &r.try_get::<String, _>("theme")?)?;

    let content = WeddingContent {
        couple_name_1: r.try_get("couple_name_1")?,
        couple_name_2: r.try_get("couple_name_2")?,
        wedding_date: r.try_get("wedding_date")?,
        venue_name: r.try_get("venue_name")?,
        venue_location: r.try_get("venue_location")?,
        their_story: r.try_get("their_story")?,
        theme,
        sections: row::from_json(TABLE, &r.try_get::<String, _>("sections_json")?)?,
        honeymoon_fund: row::from_json(TABLE, &r.try_get::<String, _>("honeymoon_fund_json")?)?,
    };

    Ok(Wedding {
        id: row::uuid(TABLE, &r.try_get::<String, _>("id")?)?,
        user_id: row::uuid(TABLE, &r.try_get::<String, _>("user_id")?)?,
        shareable_id: r.try_get("shareable_id")?,
        content,
        created_at: row::timestamp(TABLE, r.try_get("created_at")?)?,
        updated_at: row::timestamp(TABLE, r.try_get("updated_at")?)?,
    })
}
