//! PostgreSQL implementation of the AttemptRepository trait.
//!
//! Rows live in `membership_checks` (see `sql/membership_checks.sql`). The
//! table is append-only: this type issues INSERT and COUNT, nothing else.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use mc_core::domain::entities::{AttemptOutcome, NewVerificationAttempt, VerificationAttempt};
use mc_core::errors::DomainError;
use mc_core::repositories::AttemptRepository;

/// PostgreSQL implementation of AttemptRepository
#[derive(Clone)]
pub struct PgAttemptRepository {
    pool: PgPool,
}

impl PgAttemptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_attempt(row: &PgRow) -> Result<VerificationAttempt, DomainError> {
        let result: String = row
            .try_get("result")
            .map_err(|e| DomainError::repository(format!("Failed to get result: {}", e)))?;

        let outcome = result
            .parse::<AttemptOutcome>()
            .map_err(DomainError::repository)?;

        Ok(VerificationAttempt {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::repository(format!("Failed to get id: {}", e)))?,
            login: row
                .try_get("login")
                .map_err(|e| DomainError::repository(format!("Failed to get login: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::repository(format!("Failed to get phone: {}", e)))?,
            ip_address: row.try_get("ip_address").map_err(|e| {
                DomainError::repository(format!("Failed to get ip_address: {}", e))
            })?,
            outcome,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(|e| {
                DomainError::repository(format!("Failed to get created_at: {}", e))
            })?,
        })
    }
}

#[async_trait]
impl AttemptRepository for PgAttemptRepository {
    async fn insert(
        &self,
        attempt: &NewVerificationAttempt,
    ) -> Result<VerificationAttempt, DomainError> {
        let query = r#"
            INSERT INTO membership_checks (login, phone, ip_address, result)
            VALUES ($1, $2, $3, $4)
            RETURNING id, login, phone, ip_address, result, created_at
        "#;

        let row = sqlx::query(query)
            .bind(&attempt.login)
            .bind(&attempt.phone)
            .bind(&attempt.ip_address)
            .bind(attempt.outcome.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::repository(format!("Failed to insert verification attempt: {}", e))
            })?;

        Self::row_to_attempt(&row)
    }

    async fn count_since(
        &self,
        ip_address: &str,
        since: DateTime<Utc>,
        excluding: AttemptOutcome,
    ) -> Result<u64, DomainError> {
        let query = r#"
            SELECT COUNT(*)
            FROM membership_checks
            WHERE ip_address = $1
              AND created_at >= $2
              AND result <> $3
        "#;

        let count: i64 = sqlx::query_scalar(query)
            .bind(ip_address)
            .bind(since)
            .bind(excluding.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::repository(format!("Failed to count verification attempts: {}", e))
            })?;

        Ok(count.max(0) as u64)
    }
}
