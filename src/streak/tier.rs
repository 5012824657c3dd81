//! Classifies an active streak for the "streak status" line of the credit view.

use crate::constants::{GREAT_STREAK_FROM, MAX_STREAK_CREDITS, MAX_STREAK_FROM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTier {
    /// No streak or a single day.
    Starting,
    /// Days remaining until the 15-credit plateau.
    Building { days_to_next: u32 },
    /// Days remaining until the capped reward.
    Great { days_to_max: u32 },
    Max,
}

impl StreakTier {
    pub fn for_length(current_streak_length: u32) -> Self {
        match current_streak_length {
            len if len >= MAX_STREAK_FROM => Self::Max,
            len if len >= GREAT_STREAK_FROM => Self::Great {
                days_to_max: MAX_STREAK_FROM - len,
            },
            len if len >= 2 => Self::Building {
                days_to_next: GREAT_STREAK_FROM - len,
            },
            _ => Self::Starting,
        }
    }

    pub fn status_line(&self) -> String {
        match self {
            Self::Max => format!("🔥 Maximum streak! {} credits daily", MAX_STREAK_CREDITS),
            Self::Great { days_to_max } => {
                format!("🚀 Great streak! {} more days for max reward", days_to_max)
            }
            Self::Building { days_to_next } => {
                format!("📈 Building streak! {} more days for 15 credits", days_to_next)
            }
            Self::Starting => "🌱 Just getting started!".to_string(),
        }
    }
}
