//! Contains the core logic for the `blast` command.

use crate::database::{CheckInStore, RecordOutcome};
use crate::error::CheckInError;
use crate::streak;
use chrono::{DateTime, Utc};
use serenity::model::id::UserId;
use tracing::info;

/// What a successful check-in earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInReceipt {
    pub credits_earned: u64,
    /// Streak length including today.
    pub streak_length: u32,
    /// Lifetime credits including today.
    pub total_credits: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    Recorded(CheckInReceipt),
    /// The user already has a check-in for this calendar day. Not an error.
    AlreadyCheckedIn,
}

/// Checks the user in for the calendar day of `now`, at most once per day.
pub async fn perform_check_in(
    store: &dyn CheckInStore,
    user_id: UserId,
    username: &str,
    now: DateTime<Utc>,
) -> Result<CheckInOutcome, CheckInError> {
    let today = now.date_naive();
    if store.has_checked_in(user_id, today).await? {
        return Ok(CheckInOutcome::AlreadyCheckedIn);
    }

    let dates = store.fetch_all_dates(user_id).await?;
    let summary = streak::summarize(&dates, today);
    let credits_earned = streak::next_reward(summary.current_streak_length);

    // Another request may have checked this user in since the lookup above.
    if store.record_check_in(user_id, username, now).await? == RecordOutcome::AlreadyRecorded {
        return Ok(CheckInOutcome::AlreadyCheckedIn);
    }

    let receipt = CheckInReceipt {
        credits_earned,
        streak_length: summary.current_streak_length + 1,
        total_credits: summary.total_credits + credits_earned,
    };
    info!(
        user_id = user_id.get(),
        credits = receipt.credits_earned,
        streak = receipt.streak_length,
        total = receipt.total_credits,
        "check-in complete"
    );
    Ok(CheckInOutcome::Recorded(receipt))
}
