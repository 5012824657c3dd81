//! This module acts as a central hub for check-in persistence.
//! The streak engine only ever sees calendar days; everything about how check-ins
//! are stored, parsed, and deduplicated per day lives here.

pub mod checkins;
pub mod init;
pub mod memory;
pub mod models;
pub mod store;
pub mod timestamps;

pub use checkins::PgCheckInStore;
pub use memory::MemoryCheckInStore;
pub use models::{RawCheckIn, RecordOutcome};
pub use store::CheckInStore;
pub use timestamps::parse_check_in_day;
