//! This module implements the `/blast` daily check-in command.

pub mod logic;
pub mod run;
pub mod ui;
