//! Embeds for the `credit` command.

use super::logic::CreditReport;
use crate::ui::style::{self, COLOR_GOLD, COLOR_WELCOME, EMOJI_CREDITS, EMOJI_FIRE, error_embed};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn create_report_embed(username: &str, report: &CreditReport) -> CreateEmbed {
    let title = format!("{} Your Credits", EMOJI_CREDITS);
    if !report.has_history {
        return CreateEmbed::new()
            .title(title)
            .description(format!("**{}**, you haven't checked in yet!", username))
            .color(COLOR_WELCOME)
            .field("Total Credits", style::credits(0), true)
            .field("Consecutive Days", style::days(0), true)
            .field(
                "Next Reward",
                format!("{} for first check-in", style::credits(report.next_reward)),
                false,
            )
            .footer(CreateEmbedFooter::new(
                "Use /blast to start your check-in streak!",
            ));
    }

    CreateEmbed::new()
        .title(title)
        .description(format!("**{}**'s check-in statistics", username))
        .color(COLOR_GOLD)
        .field(
            "Total Credits",
            style::credits(report.summary.total_credits),
            true,
        )
        .field(
            "Consecutive Days",
            style::days(report.summary.current_streak_length),
            true,
        )
        .field("Next Reward", style::credits(report.next_reward), true)
        .field("Streak Status", report.tier.status_line(), false)
        .footer(CreateEmbedFooter::new(format!(
            "Keep checking in daily to maintain your streak! {}",
            EMOJI_FIRE
        )))
}

pub fn create_failure_embed() -> CreateEmbed {
    error_embed(
        "Credits Unavailable",
        "Your check-in history couldn't be read right now. Your credits are safe; please try again shortly.",
    )
}
