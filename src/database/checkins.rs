//! Postgres-backed check-in store.

use super::init::DbPool;
use super::models::{RawCheckIn, RecordOutcome};
use super::store::CheckInStore;
use crate::error::CheckInError;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serenity::async_trait;
use serenity::model::id::UserId;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct PgCheckInStore {
    pool: DbPool,
}

impl PgCheckInStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInStore for PgCheckInStore {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_records(&self, user_id: UserId) -> Result<Vec<RawCheckIn>, CheckInError> {
        let user_id_i64 = user_id.get() as i64;
        let records = sqlx::query_as::<_, RawCheckIn>(
            "SELECT username, sign_in_time FROM user_sign_ins WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id_i64)
        .fetch_all(&self.pool)
        .await?;
        debug!(user_id = user_id.get(), count = records.len(), "fetched check-in records");
        Ok(records)
    }

    #[instrument(level = "debug", skip(self))]
    async fn has_checked_in(
        &self,
        user_id: UserId,
        day: NaiveDate,
    ) -> Result<bool, CheckInError> {
        let user_id_i64 = user_id.get() as i64;
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM user_sign_ins WHERE user_id = $1 AND check_in_day = $2)",
        )
        .bind(user_id_i64)
        .bind(day)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    #[instrument(level = "debug", skip(self))]
    async fn record_check_in(
        &self,
        user_id: UserId,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<RecordOutcome, CheckInError> {
        let user_id_i64 = user_id.get() as i64;
        let day = at.date_naive();
        let result = sqlx::query(
            r#"INSERT INTO user_sign_ins (user_id, username, sign_in_time, check_in_day)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, check_in_day) DO NOTHING"#,
        )
        .bind(user_id_i64)
        .bind(username)
        .bind(at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .bind(day)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            info!(user_id = user_id.get(), %day, "check-in recorded");
            Ok(RecordOutcome::Recorded)
        } else {
            info!(user_id = user_id.get(), %day, "check-in already recorded for day");
            Ok(RecordOutcome::AlreadyRecorded)
        }
    }
}
