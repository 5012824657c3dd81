//! This module implements the `blast` command, supporting both prefix and slash commands.

use super::logic::perform_check_in;
use super::ui;
use crate::AppState;
use crate::ui::style::state_unavailable_embed;
use chrono::Utc;
use serenity::builder::{CreateCommand, CreateEmbed};
use serenity::builder::{CreateInteractionResponseFollowup, CreateMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;
use tracing::{error, warn};

pub fn register() -> CreateCommand {
    CreateCommand::new("blast")
        .description("Daily check-in - Each user can only check in once per day")
}

async fn check_in_embed(app_state: &AppState, user: &User) -> CreateEmbed {
    match perform_check_in(app_state.store.as_ref(), user.id, &user.name, Utc::now()).await {
        Ok(outcome) => ui::outcome_embed(&user.name, &outcome),
        Err(e) => {
            error!(command = "blast", user_id = user.id.get(), error = %e, "check-in failed");
            ui::create_failure_embed()
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();

    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "blast", "missing_app_state");
        let builder = CreateInteractionResponseFollowup::new()
            .embed(state_unavailable_embed());
        interaction.create_followup(&ctx.http, builder).await.ok();
        return;
    };
    let embed = check_in_embed(&app_state, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "blast", "missing_app_state");
        let builder = CreateMessage::new()
            .embed(state_unavailable_embed())
            .reference_message(msg);
        msg.channel_id.send_message(&ctx.http, builder).await.ok();
        return;
    };
    let embed = check_in_embed(&app_state, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
