//! Runtime configuration read from the environment (optionally via `.env`).

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_PREFIX};
use serenity::model::id::{GuildId, UserId};
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{name} must be a valid non-zero id, got `{value}`")]
    InvalidId { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Guild the slash commands are registered on and messages are accepted from.
    pub guild_id: GuildId,
    /// `None` runs the bot on the in-memory store.
    pub database_url: Option<String>,
    pub prefix: String,
    /// Users allowed to inspect other users with `/debug`, on top of server administrators.
    pub admin_user_ids: Vec<UserId>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = non_empty("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let server_id = non_empty("SERVER_ID").ok_or(ConfigError::Missing("SERVER_ID"))?;
        let guild_id = GuildId::new(parse_id("SERVER_ID", &server_id)?);

        let admin_user_ids = match non_empty("ADMIN_USER_IDS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_id("ADMIN_USER_IDS", s).map(UserId::new))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            discord_token,
            guild_id,
            database_url: non_empty("DATABASE_URL"),
            prefix: non_empty("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            admin_user_ids,
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.admin_user_ids.contains(&user_id)
    }
}

fn parse_id(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidId {
            name,
            value: value.to_string(),
        })
}
