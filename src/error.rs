//! Error types shared by the check-in store and the command logic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckInError {
    /// The backing database could not be reached or a query failed.
    #[error("check-in store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// A stored timestamp could not be turned into a calendar day.
    /// Only ever surfaced per record; summaries skip these.
    #[error("malformed check-in record `{raw}`: {reason}")]
    MalformedRecord { raw: String, reason: String },
}
