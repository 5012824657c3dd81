//! Central UI style constants and helpers.
pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_GOLD: u32 = 0xF1C40F;
pub const COLOR_WELCOME: u32 = 0xE67E22; // Orange
pub const COLOR_NOTICE: u32 = 0xF39C12; // Amber
pub const COLOR_INFO: u32 = 0x3498DB; // Blue
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_CHECK: &str = "✅";
pub const EMOJI_WARN: &str = "⚠️";
pub const EMOJI_CREDITS: &str = "💰";
pub const EMOJI_FIRE: &str = "🔥";

pub fn credits(amount: u64) -> String {
    format!("{} credits", amount)
}

pub fn days(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

/// Reply used when the shared bot state is not registered, so a deferred
/// interaction never stays on "thinking…".
pub fn state_unavailable_embed() -> CreateEmbed {
    error_embed(
        "Bot Not Ready",
        "The bot is still starting up and can't reach check-in data yet. Please try again in a moment.",
    )
}
