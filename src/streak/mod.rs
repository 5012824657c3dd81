//! The streak engine: rebuilds a user's lifetime credits and active streak from
//! nothing but the calendar days they checked in on.
//!
//! Everything in here is pure and synchronous. Callers fetch the day history from a
//! [`crate::database::CheckInStore`] and pass it in together with the evaluation day.

pub mod engine;
pub mod tier;

pub use engine::{
    StreakSegment, UserStreakSummary, credits_for_position, next_reward, replay, summarize, today,
};
pub use tier::StreakTier;
