//! This module implements the `debug` command, supporting both prefix and slash commands.

use super::logic::{inspect, may_inspect};
use super::ui;
use crate::AppState;
use crate::ui::style::state_unavailable_embed;
use crate::streak;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponseFollowup,
    CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::model::permissions::Permissions;
use serenity::prelude::*;
use tracing::{error, info, warn};

pub fn register() -> CreateCommand {
    CreateCommand::new("debug")
        .description("Debug user check-in data (other users: admin only)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "User to inspect (default: yourself)",
            )
            .required(false),
        )
}

async fn inspection_embed(
    app_state: &AppState,
    requester: UserId,
    target: UserId,
    target_name: &str,
    is_admin: bool,
) -> CreateEmbed {
    if !may_inspect(requester, target, is_admin) {
        warn!(
            command = "debug",
            requester = requester.get(),
            target = target.get(),
            "inspection denied"
        );
        return ui::create_forbidden_embed();
    }
    info!(command = "debug", requester = requester.get(), target = target.get(), "inspecting");
    match inspect(app_state.store.as_ref(), target, streak::today()).await {
        Ok(inspection) => ui::create_report_embed(target_name, target, &inspection),
        Err(e) => {
            error!(command = "debug", target = target.get(), error = %e, "inspection failed");
            ui::create_failure_embed()
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();

    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "debug", "missing_app_state");
        let builder = CreateInteractionResponseFollowup::new()
            .ephemeral(true)
            .embed(state_unavailable_embed());
        interaction.create_followup(&ctx.http, builder).await.ok();
        return;
    };

    let requester = &interaction.user;
    let target_id = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "user")
        .and_then(|opt| opt.value.as_user_id())
        .unwrap_or(requester.id);
    let target_name = if target_id == requester.id {
        requester.name.clone()
    } else {
        interaction
            .data
            .resolved
            .users
            .get(&target_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| target_id.get().to_string())
    };

    let has_admin_permission = interaction
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .is_some_and(|p| p.contains(Permissions::ADMINISTRATOR));
    let is_admin = has_admin_permission || app_state.config.is_admin(requester.id);

    let embed =
        inspection_embed(&app_state, requester.id, target_id, &target_name, is_admin).await;
    let builder = CreateInteractionResponseFollowup::new()
        .ephemeral(true)
        .embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "debug", "missing_app_state");
        let builder = CreateMessage::new()
            .embed(state_unavailable_embed())
            .reference_message(msg);
        msg.channel_id.send_message(&ctx.http, builder).await.ok();
        return;
    };
    let target = msg.mentions.first().unwrap_or(&msg.author);
    // Prefix messages carry no resolved permissions; only configured admins may target others.
    let is_admin = app_state.config.is_admin(msg.author.id);

    let embed =
        inspection_embed(&app_state, msg.author.id, target.id, &target.name, is_admin).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
