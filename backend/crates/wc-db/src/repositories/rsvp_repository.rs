use crate::Result as DbErrorResult;
use crate::row;

use wc_core::RsvpResponse;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "rsvps";

pub struct RsvpRepository {
    pool: SqlitePool,
}

impl RsvpRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, rsvp: &RsvpResponse) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO rsvps (
                  id, wedding_id, guest_name, guest_email, guest_phone, attendance,
                  guest_count, dietary_restrictions, special_message, submitted_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(rsvp.id.to_string())
        .bind(rsvp.wedding_id.to_string())
        .bind(&rsvp.guest_name)
        .bind(&rsvp.guest_email)
        .bind(&rsvp.guest_phone)
        .bind(rsvp.attendance.as_str())
        .bind(i64::from(rsvp.guest_count))
        .bind(&rsvp.dietary_restrictions)
        .bind(&rsvp.special_message)
        .bind(rsvp.submitted_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All responses for a wedding in submission order
    pub async fn find_by_wedding(&self, wedding_id: Uuid) -> DbErrorResult<Vec<RsvpResponse>> {
        let rows = sqlx::query(
            r#"
              SELECT id, wedding_id, guest_name, guest_email, guest_phone, attendance,
                     guest_count, dietary_restrictions, special_message, submitted_at
              FROM rsvps
              WHERE wedding_id = ?
              ORDER BY submitted_at ASC
              "#,
        )
        .bind(wedding_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_rsvp).collect()
    }
}

fn map_rsvp(r: &SqliteRow) -> DbErrorResult<RsvpResponse> {
    Ok(RsvpResponse {
        id: row::uuid(TABLE, &r.try_get::<String, _>("id")?)?,
        wedding_id: row::uuid(TABLE, &r.try_get::<String, _>("wedding_id")?)?,
        guest_name: r.try_get("guest_name")?,
        guest_email: r.try_get("guest_email")?,
        guest_phone: r.try_get("guest_phone")?,
        attendance: row::parse(TABLE, &r.try_get::<String, _>("attendance")?)?,
        guest_count: row::guest_count(TABLE, r.try_get("guest_count")?)?,
        dietary_restrictions: r.try_get("dietary_restrictions")?,
        special_message: r.try_get("special_message")?,
        submitted_at: row::timestamp(TABLE, r.try_get("submitted_at")?)?,
    })
}
