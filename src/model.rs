//! This module defines the shared state stored in Serenity's global context.

use crate::config::Config;
use crate::database::CheckInStore;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// Check-in persistence. Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn CheckInStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn CheckInStore>, config: Config) -> Self {
        Self { store, config }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
