//! Turns stored check-in timestamps into calendar days.
//!
//! Rows written by this bot are RFC 3339, but older rows may carry whatever shape
//! the previous writer used: Postgres' own `timestamptz` text, naive ISO date-times,
//! or bare dates. Instants with an offset are converted to UTC first; naive values
//! are taken to already be UTC.

use crate::error::CheckInError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_check_in_day(raw: &str) -> Result<NaiveDate, CheckInError> {
    let value = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }
    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(value, format) {
            return Ok(instant.with_timezone(&Utc).date_naive());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.date());
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| CheckInError::MalformedRecord {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
