// src/commands/mod.rs
// This file declares the existence of our command modules.

pub mod blast;
pub mod credit;
pub mod debug;
pub mod help;
