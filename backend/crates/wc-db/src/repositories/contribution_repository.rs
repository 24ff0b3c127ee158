use crate::Result as DbErrorResult;
use crate::row;

use wc_core::{Contribution, DEFAULT_CURRENCY, PaymentMethod, PaymentStatus};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "contributions";

const SELECT_COLUMNS: &str = r#"
    SELECT id, wedding_id, contributor_name, contributor_email, contributor_phone,
           amount, currency, payment_method, provider_reference, payment_status,
           message, created_at, updated_at
    FROM contributions
"#;

/// Aggregate over a wedding's completed contributions
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionSummary {
    pub total_amount: f64,
    /// Currency of the earliest completed contribution, else the default
    pub currency: String,
    pub count: i64,
}

pub struct ContributionRepository {
    pool: SqlitePool,
}

impl ContributionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a contribution. Reusing a provider reference within the same
    /// wedding surfaces as a unique violation.
    pub async fn create(&self, contribution: &Contribution) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO contributions (
                  id, wedding_id, contributor_name, contributor_email, contributor_phone,
                  amount, currency, payment_method, provider_reference, payment_status,
                  message, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(contribution.id.to_string())
        .bind(contribution.wedding_id.to_string())
        .bind(&contribution.contributor_name)
        .bind(&contribution.contributor_email)
        .bind(&contribution.contributor_phone)
        .bind(contribution.amount)
        .bind(&contribution.currency)
        .bind(contribution.payment_method.as_str())
        .bind(&contribution.provider_reference)
        .bind(contribution.payment_status.as_str())
        .bind(&contribution.message)
        .bind(contribution.created_at.timestamp_millis())
        .bind(contribution.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Card contribution created for a provider payment intent
    pub async fn find_card_by_intent(&self, intent_id: &str) -> DbErrorResult<Option<Contribution>> {
        let sql = format!(
            "{} WHERE provider_reference = ? AND payment_method = ?",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(intent_id)
            .bind(PaymentMethod::Card.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_contribution(&r)).transpose()
    }

    pub async fn find_by_reference(
        &self,
        wedding_id: Uuid,
        reference: &str,
    ) -> DbErrorResult<Option<Contribution>> {
        let sql = format!(
            "{} WHERE wedding_id = ? AND provider_reference = ?",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(wedding_id.to_string())
            .bind(reference)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_contribution(&r)).transpose()
    }

    /// Returns false if no contribution has this ID
    pub async fn update_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result =
            sqlx::query("UPDATE contributions SET payment_status = ?, updated_at = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(updated_at.timestamp_millis())
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Completed contributions, oldest first. Pending and failed never count.
    pub async fn find_completed(&self, wedding_id: Uuid) -> DbErrorResult<Vec<Contribution>> {
        let sql = format!(
            "{} WHERE wedding_id = ? AND payment_status = ? ORDER BY created_at ASC, rowid ASC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(wedding_id.to_string())
            .bind(PaymentStatus::Completed.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_contribution).collect()
    }

    pub async fn summarize_completed(&self, wedding_id: Uuid) -> DbErrorResult<ContributionSummary> {
        let row = sqlx::query(
            r#"
              SELECT COALESCE(SUM(amount), 0.0) AS total_amount,
                     COUNT(*) AS count,
                     (SELECT currency FROM contributions
                      WHERE wedding_id = ?1 AND payment_status = ?2
                      ORDER BY created_at ASC, rowid ASC LIMIT 1) AS currency
              FROM contributions
              WHERE wedding_id = ?1 AND payment_status = ?2
              "#,
        )
        .bind(wedding_id.to_string())
        .bind(PaymentStatus::Completed.as_str())
        .fetch_one(&self.pool)
        .await?;

        let currency: Option<String> = row.try_get("currency")?;

        Ok(ContributionSummary {
            total_amount: row.try_get("total_amount")?,
            currency: currency.unwrap_or_else(|| String::from(DEFAULT_CURRENCY)),
            count: row.try_get("count")?,
        })
    }
}

fn map_contribution(r: &SqliteRow) -> DbErrorResult<Contribution> {
    Ok(Contribution {
        id: row::uuid(TABLE, &r.try_get::<String, _>("id")?)?,
        wedding_id: row::uuid(TABLE, &r.try_get::<String, _>("wedding_id")?)?,
        contributor_name: r.try_get("contributor_name")?,
        contributor_email: r.try_get("contributor_email")?,
        contributor_phone: r.try_get("contributor_phone")?,
        amount: r.try_get("amount")?,
        currency: r.try_get("currency")?,
        payment_method: row::parse(TABLE, &r.try_get::<String, _>("payment_method")?)?,
        provider_reference: r.try_get("provider_reference")?,
        payment_status: row::parse(TABLE, &r.try_get::<String, _>("payment_status")?)?,
        message: r.try_get("message")?,
        created_at: row::timestamp(TABLE, r.try_get("created_at")?)?,
        updated_at: row::timestamp(TABLE, r.try_get("updated_at")?)?,
    })
}
