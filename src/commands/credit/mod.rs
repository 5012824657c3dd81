//! This module implements the `/credit` command: lifetime credits and the active streak.

pub mod logic;
pub mod run;
pub mod ui;
