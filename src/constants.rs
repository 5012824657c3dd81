// Central constants for the reward curve and presentation limits.

// Credits per streak position: day 1, days 2-6, days 7-19, day 20 onward.
pub const FIRST_DAY_CREDITS: u64 = 5;
pub const BUILDING_STREAK_CREDITS: u64 = 10;
pub const GREAT_STREAK_CREDITS: u64 = 15;
pub const MAX_STREAK_CREDITS: u64 = 20;

/// First streak position paying `GREAT_STREAK_CREDITS`.
pub const GREAT_STREAK_FROM: u32 = 7;
/// First streak position paying `MAX_STREAK_CREDITS`.
pub const MAX_STREAK_FROM: u32 = 20;

/// Raw records listed by `/debug` before the list is truncated.
pub const DEBUG_RECORD_LIMIT: usize = 25;
/// Streak segments listed by `/debug`, most recent first.
pub const DEBUG_SEGMENT_LIMIT: usize = 10;
/// Characters of a raw stored timestamp shown per `/debug` line.
pub const DEBUG_RAW_VALUE_LIMIT: usize = 48;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_LOG_LEVEL: &str = "info";
