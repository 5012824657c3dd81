use crate::database::{CheckInStore, parse_check_in_day};
use crate::error::CheckInError;
use crate::streak::{self, StreakSegment, UserStreakSummary};
use chrono::NaiveDate;
use serenity::model::id::UserId;

/// A stored record alongside the day it resolves to, or why it doesn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    pub sign_in_time: String,
    pub parsed: Result<NaiveDate, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub records: Vec<RecordLine>,
    /// Oldest first.
    pub segments: Vec<StreakSegment>,
    pub summary: UserStreakSummary,
}

impl Inspection {
    pub fn malformed_count(&self) -> usize {
        self.records.iter().filter(|r| r.parsed.is_err()).count()
    }
}

/// Only administrators may look at someone else's history.
pub fn may_inspect(requester: UserId, target: UserId, is_admin: bool) -> bool {
    requester == target || is_admin
}

pub async fn inspect(
    store: &dyn CheckInStore,
    user_id: UserId,
    today: NaiveDate,
) -> Result<Inspection, CheckInError> {
    let records: Vec<RecordLine> = store
        .fetch_records(user_id)
        .await?
        .into_iter()
        .map(|record| {
            let parsed = parse_check_in_day(&record.sign_in_time).map_err(|e| e.to_string());
            RecordLine {
                sign_in_time: record.sign_in_time,
                parsed,
            }
        })
        .collect();

    let days: Vec<NaiveDate> = records
        .iter()
        .filter_map(|r| r.parsed.as_ref().ok().copied())
        .collect();

    Ok(Inspection {
        segments: streak::replay(&days),
        summary: streak::summarize(&days, today),
        records,
    })
}
