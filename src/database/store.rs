//! The storage capability the command layer is handed at startup.

use super::models::{RawCheckIn, RecordOutcome};
use super::timestamps::parse_check_in_day;
use crate::error::CheckInError;
use chrono::{DateTime, NaiveDate, Utc};
use serenity::async_trait;
use serenity::model::id::UserId;
use tracing::warn;

/// Append-only check-in storage keyed by user.
///
/// Implementations must make `record_check_in` atomic per (user, calendar day):
/// when two check-ins for the same day race, exactly one sees
/// [`RecordOutcome::Recorded`].
#[async_trait]
pub trait CheckInStore: Send + Sync {
    /// All stored records for a user, oldest first.
    async fn fetch_records(&self, user_id: UserId) -> Result<Vec<RawCheckIn>, CheckInError>;

    async fn has_checked_in(&self, user_id: UserId, day: NaiveDate)
    -> Result<bool, CheckInError>;

    async fn record_check_in(
        &self,
        user_id: UserId,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<RecordOutcome, CheckInError>;

    /// Calendar days of every parsable record. Unparsable records are logged and
    /// skipped so one bad row never hides the rest of a user's history.
    async fn fetch_all_dates(&self, user_id: UserId) -> Result<Vec<NaiveDate>, CheckInError> {
        let records = self.fetch_records(user_id).await?;
        Ok(parse_days(user_id, &records))
    }
}

pub(crate) fn parse_days(user_id: UserId, records: &[RawCheckIn]) -> Vec<NaiveDate> {
    records
        .iter()
        .filter_map(|record| match parse_check_in_day(&record.sign_in_time) {
            Ok(day) => Some(day),
            Err(e) => {
                warn!(user_id = user_id.get(), error = %e, "skipping check-in record");
                None
            }
        })
        .collect()
}
