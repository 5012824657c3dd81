use crate::{AppState, commands};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Blast,
    Credit,
    Debug,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blast" | "checkin" | "b" => Ok(Command::Blast),
            "credit" | "credits" | "c" => Ok(Command::Credit),
            "debug" => Ok(Command::Debug),
            "help" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Splits a message into command and arguments if it starts with `prefix`.
pub fn parse_prefixed<'a>(content: &'a str, prefix: &str) -> Option<(Command, Vec<&'a str>)> {
    let command_body = content.strip_prefix(prefix)?;
    let mut args = command_body.split_whitespace();
    let command_str = args.next()?;
    let command = Command::from_str(&command_str.to_lowercase()).unwrap_or(Command::Unknown);
    Some((command, args.collect()))
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            debug!(command = %command.data.name, user_id = command.user.id.get(), "slash command");
            match command.data.name.as_str() {
                "blast" => commands::blast::run::run_slash(&ctx, command).await,
                "credit" => commands::credit::run::run_slash(&ctx, command).await,
                "debug" => commands::debug::run::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &interaction {
            let command_family = component.data.custom_id.split('_').next().unwrap_or("");
            if command_family == "help" {
                commands::help::handle_interaction(&ctx, component).await;
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let Some((command, args_vec)) = parse_prefixed(&msg.content, &app_state.config.prefix)
        else {
            return;
        };
        match command {
            Command::Blast => commands::blast::run::run_prefix(&ctx, &msg).await,
            Command::Credit => commands::credit::run::run_prefix(&ctx, &msg).await,
            Command::Debug => commands::debug::run::run_prefix(&ctx, &msg).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg, args_vec).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::blast::run::register(),
            commands::credit::run::register(),
            commands::debug::run::register(),
            commands::help::register(),
        ];
        match self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            Ok(registered) => info!(count = registered.len(), "registered guild commands"),
            Err(e) => error!(error = ?e, "failed to register guild commands"),
        }
    }
}
