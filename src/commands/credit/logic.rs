use crate::database::CheckInStore;
use crate::error::CheckInError;
use crate::streak::{self, StreakTier, UserStreakSummary};
use chrono::NaiveDate;
use serenity::model::id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditReport {
    pub summary: UserStreakSummary,
    /// Credits a check-in on the evaluation day would earn.
    pub next_reward: u64,
    pub tier: StreakTier,
    /// False when the user has no usable check-in days at all.
    pub has_history: bool,
}

pub async fn credit_report(
    store: &dyn CheckInStore,
    user_id: UserId,
    today: NaiveDate,
) -> Result<CreditReport, CheckInError> {
    let dates = store.fetch_all_dates(user_id).await?;
    let summary = streak::summarize(&dates, today);
    Ok(CreditReport {
        summary,
        next_reward: streak::next_reward(summary.current_streak_length),
        tier: StreakTier::for_length(summary.current_streak_length),
        has_history: !dates.is_empty(),
    })
}
