//! Data structures that map to check-in rows or store results.

/// One stored check-in, exactly as persisted.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct RawCheckIn {
    pub username: String,
    /// The check-in instant as stored text; see [`super::parse_check_in_day`].
    pub sign_in_time: String,
}

/// Result of trying to append a check-in for a user's calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    /// A record for that user and day already exists; nothing was written.
    AlreadyRecorded,
}
