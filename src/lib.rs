// Library entry so integration tests and the binary share the same modules.
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod streak;
pub mod ui;

pub use model::AppState;
