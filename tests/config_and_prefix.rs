use checkin_bot::config::{Config, ConfigError};
use checkin_bot::handler::{Command, parse_prefixed};
use serenity::model::id::UserId;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn minimal_config_uses_defaults() {
    let config =
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "t"), ("SERVER_ID", "123")])).unwrap();
    assert_eq!(config.guild_id.get(), 123);
    assert_eq!(config.prefix, "!");
    assert_eq!(config.log_level, "info");
    assert!(config.database_url.is_none());
    assert!(config.admin_user_ids.is_empty());
}

#[test]
fn admin_ids_are_parsed() {
    let config = Config::from_lookup(lookup(&[
        ("DISCORD_TOKEN", "t"),
        ("SERVER_ID", "123"),
        ("ADMIN_USER_IDS", "7, 9"),
        ("DATABASE_URL", "postgres://localhost/checkins"),
    ]))
    .unwrap();
    assert!(config.is_admin(UserId::new(9)));
    assert!(!config.is_admin(UserId::new(8)));
    assert_eq!(
        config.database_url.as_deref(),
        Some("postgres://localhost/checkins")
    );
}

#[test]
fn missing_token_is_reported() {
    let err = Config::from_lookup(lookup(&[("SERVER_ID", "123")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("DISCORD_TOKEN")));
}

#[test]
fn bad_server_id_is_reported() {
    let err =
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "t"), ("SERVER_ID", "abc")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidId { name: "SERVER_ID", .. }));
    let err =
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "t"), ("SERVER_ID", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidId { .. }));
}

#[test]
fn prefixed_messages_resolve_commands() {
    assert_eq!(parse_prefixed("!blast", "!"), Some((Command::Blast, vec![])));
    assert_eq!(
        parse_prefixed("!help credit", "!"),
        Some((Command::Help, vec!["credit"]))
    );
    assert_eq!(parse_prefixed("!CREDIT", "!"), Some((Command::Credit, vec![])));
    assert_eq!(parse_prefixed("!dance", "!"), Some((Command::Unknown, vec![])));
    assert_eq!(parse_prefixed("blast", "!"), None);
    assert_eq!(parse_prefixed("!", "!"), None);
}
