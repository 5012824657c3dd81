//! Process-local check-in store, used when no database is configured.
//! Nothing survives a restart.

use super::models::{RawCheckIn, RecordOutcome};
use super::store::{CheckInStore, parse_days};
use crate::error::CheckInError;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serenity::async_trait;
use serenity::model::id::UserId;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{info, instrument};

#[derive(Default)]
pub struct MemoryCheckInStore {
    // The lock is held across the day check and the append so same-day
    // check-ins from one user serialize.
    records: Mutex<HashMap<u64, Vec<RawCheckIn>>>,
}

impl MemoryCheckInStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record verbatim, bypassing the one-per-day rule and timestamp
    /// validation. Only meant for tests that need backdated or malformed rows;
    /// the bot itself writes through [`CheckInStore::record_check_in`].
    pub async fn import_raw(&self, user_id: UserId, username: &str, sign_in_time: &str) {
        self.records
            .lock()
            .await
            .entry(user_id.get())
            .or_default()
            .push(RawCheckIn {
                username: username.to_string(),
                sign_in_time: sign_in_time.to_string(),
            });
    }
}

#[async_trait]
impl CheckInStore for MemoryCheckInStore {
    async fn fetch_records(&self, user_id: UserId) -> Result<Vec<RawCheckIn>, CheckInError> {
        let records = self.records.lock().await;
        Ok(records.get(&user_id.get()).cloned().unwrap_or_default())
    }

    async fn has_checked_in(
        &self,
        user_id: UserId,
        day: NaiveDate,
    ) -> Result<bool, CheckInError> {
        let records = self.records.lock().await;
        let existing = records.get(&user_id.get()).map(Vec::as_slice).unwrap_or(&[]);
        Ok(parse_days(user_id, existing).contains(&day))
    }

    #[instrument(level = "debug", skip(self))]
    async fn record_check_in(
        &self,
        user_id: UserId,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<RecordOutcome, CheckInError> {
        let day = at.date_naive();
        let mut records = self.records.lock().await;
        let entries = records.entry(user_id.get()).or_default();
        if parse_days(user_id, entries.as_slice()).contains(&day) {
            return Ok(RecordOutcome::AlreadyRecorded);
        }
        entries.push(RawCheckIn {
            username: username.to_string(),
            sign_in_time: at.to_rfc3339_opts(SecondsFormat::Micros, true),
        });
        info!(user_id = user_id.get(), %day, "check-in recorded in memory");
        Ok(RecordOutcome::Recorded)
    }
}
