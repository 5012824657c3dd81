//! This module implements the `credit` command, supporting both prefix and slash commands.

use super::logic::credit_report;
use super::ui;
use crate::AppState;
use crate::ui::style::state_unavailable_embed;
use crate::streak;
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;
use tracing::{error, warn};

pub fn register() -> CreateCommand {
    CreateCommand::new("credit")
        .description("Check your total credits and consecutive check-in days")
}

async fn report_embed(app_state: &AppState, user: &User) -> CreateEmbed {
    match credit_report(app_state.store.as_ref(), user.id, streak::today()).await {
        Ok(report) => ui::create_report_embed(&user.name, &report),
        Err(e) => {
            error!(command = "credit", user_id = user.id.get(), error = %e, "credit lookup failed");
            ui::create_failure_embed()
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();

    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "credit", "missing_app_state");
        let builder = CreateInteractionResponseFollowup::new()
            .embed(state_unavailable_embed());
        interaction.create_followup(&ctx.http, builder).await.ok();
        return;
    };
    let embed = report_embed(&app_state, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "credit", "missing_app_state");
        let builder = CreateMessage::new()
            .embed(state_unavailable_embed())
            .reference_message(msg);
        msg.channel_id.send_message(&ctx.http, builder).await.ok();
        return;
    };
    let embed = report_embed(&app_state, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
