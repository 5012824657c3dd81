//! Tracing setup. `RUST_LOG` wins over the configured level when set, so the
//! per-day streak replay can be surfaced with e.g. `RUST_LOG=checkin_bot::streak=debug`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
