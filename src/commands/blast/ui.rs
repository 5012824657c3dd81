//! Handles all embed creation for the `blast` command.

use super::logic::{CheckInOutcome, CheckInReceipt};
use crate::ui::style::{
    self, COLOR_NOTICE, COLOR_SUCCESS, EMOJI_CHECK, EMOJI_FIRE, EMOJI_WARN, error_embed,
};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn outcome_embed(username: &str, outcome: &CheckInOutcome) -> CreateEmbed {
    match outcome {
        CheckInOutcome::Recorded(receipt) => create_success_embed(username, receipt),
        CheckInOutcome::AlreadyCheckedIn => create_already_checked_in_embed(username),
    }
}

/// Creates the embed for a successful check-in.
pub fn create_success_embed(username: &str, receipt: &CheckInReceipt) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} Check-in Successful!", EMOJI_CHECK))
        .description(format!("**{}** has checked in successfully!", username))
        .color(COLOR_SUCCESS)
        .field(
            "Credits Earned",
            format!("+{}", style::credits(receipt.credits_earned)),
            true,
        )
        .field("Consecutive Days", style::days(receipt.streak_length), true)
        .field("Total Credits", style::credits(receipt.total_credits), true)
        .footer(CreateEmbedFooter::new(format!(
            "Keep the streak going! {}",
            EMOJI_FIRE
        )))
}

pub fn create_already_checked_in_embed(username: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} Already Checked In", EMOJI_WARN))
        .description(format!(
            "**{}**, you have already checked in today! Come back tomorrow~",
            username
        ))
        .color(COLOR_NOTICE)
}

/// Shown when the store could not be read or written. Never claims zero credits.
pub fn create_failure_embed() -> CreateEmbed {
    error_embed(
        "Check-in Failed",
        "Your check-in history couldn't be reached right now, so nothing was recorded. Please try again in a moment.",
    )
}
