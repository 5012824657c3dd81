//! This module implements `/debug`, a read-only view of a user's stored check-ins
//! and how the streak engine interprets them.

pub mod logic;
pub mod run;
pub mod ui;
