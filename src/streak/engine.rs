//! Replays a check-in day history into streak segments and credit totals.

use crate::constants::{
    BUILDING_STREAK_CREDITS, FIRST_DAY_CREDITS, GREAT_STREAK_CREDITS, GREAT_STREAK_FROM,
    MAX_STREAK_CREDITS, MAX_STREAK_FROM,
};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Lifetime credits plus the streak that is still alive on the evaluation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStreakSummary {
    pub total_credits: u64,
    pub current_streak_length: u32,
}

/// A maximal run of consecutive check-in days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakSegment {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub length: u32,
    /// Sum of the per-day credits earned inside this run.
    pub credits: u64,
}

/// The current calendar day in the bot's reference timezone (UTC).
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Credits awarded for the `position`-th day of a streak (1 = first day).
///
/// Position 0 has no meaning for a recorded day; it is treated like the first day.
pub fn credits_for_position(position: u32) -> u64 {
    match position {
        0 | 1 => FIRST_DAY_CREDITS,
        p if p < GREAT_STREAK_FROM => BUILDING_STREAK_CREDITS,
        p if p < MAX_STREAK_FROM => GREAT_STREAK_CREDITS,
        _ => MAX_STREAK_CREDITS,
    }
}

/// Credits the user would earn by checking in today, given their active streak.
pub fn next_reward(current_streak_length: u32) -> u64 {
    credits_for_position(current_streak_length.saturating_add(1))
}

/// Collapses duplicates and sorts ascending.
fn normalize(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    dates
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn is_next_day(prev: NaiveDate, day: NaiveDate) -> bool {
    prev.succ_opt() == Some(day)
}

/// Single forward pass over sorted distinct days. Any gap, even one missed day,
/// restarts the position counter at 1.
fn forward_pass(days: &[NaiveDate], mut visit: impl FnMut(NaiveDate, u32, u64)) {
    let mut position = 0u32;
    let mut last_date: Option<NaiveDate> = None;
    for &day in days {
        position = match last_date {
            Some(prev) if is_next_day(prev, day) => position + 1,
            _ => 1,
        };
        let credits = credits_for_position(position);
        debug!(%day, position, credits, "streak day replayed");
        visit(day, position, credits);
        last_date = Some(day);
    }
}

/// Length of the run ending at the latest day, or 0 when that day is older than
/// yesterday relative to `evaluation_day`.
fn active_streak(days: &[NaiveDate], evaluation_day: NaiveDate) -> u32 {
    let Some(&latest) = days.last() else {
        return 0;
    };
    if latest != evaluation_day && Some(latest) != evaluation_day.pred_opt() {
        return 0;
    }
    let mut length = 1;
    for pair in days.windows(2).rev() {
        if !is_next_day(pair[0], pair[1]) {
            break;
        }
        length += 1;
    }
    length
}

/// Rebuilds the summary for one user from their (unordered, possibly duplicated)
/// check-in days.
pub fn summarize(dates: &[NaiveDate], evaluation_day: NaiveDate) -> UserStreakSummary {
    let days = normalize(dates);
    if days.is_empty() {
        return UserStreakSummary::default();
    }

    let mut total_credits = 0u64;
    forward_pass(&days, |_, _, credits| total_credits += credits);
    let current_streak_length = active_streak(&days, evaluation_day);

    debug!(
        distinct_days = days.len(),
        total_credits,
        current_streak_length,
        %evaluation_day,
        "streak summary computed"
    );
    UserStreakSummary {
        total_credits,
        current_streak_length,
    }
}

/// Splits the history into its streak segments, oldest first.
pub fn replay(dates: &[NaiveDate]) -> Vec<StreakSegment> {
    let days = normalize(dates);
    let mut segments: Vec<StreakSegment> = Vec::new();
    forward_pass(&days, |day, position, credits| {
        match segments.last_mut() {
            Some(segment) if position > 1 => {
                segment.end_date = day;
                segment.length = position;
                segment.credits += credits;
            }
            _ => segments.push(StreakSegment {
                start_date: day,
                end_date: day,
                length: 1,
                credits,
            }),
        }
    });
    segments
}
