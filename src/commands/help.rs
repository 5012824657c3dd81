//! This module implements the interactive help command.
//!
//! A categorized overview with a dropdown for details, or a detail view when a
//! command name is given.

use crate::AppState;
use crate::constants::DEFAULT_PREFIX;
use serenity::all::ComponentInteractionDataKind;
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType, ComponentInteraction};
use serenity::model::channel::Message;
use serenity::prelude::*;

/// Custom id of the help dropdown; the handler routes on the `help` family.
pub const HELP_SELECT_ID: &str = "help_select_command";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    CheckIn,
    General,
    Admin,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::CheckIn => "Daily Check-in",
            Self::General => "General",
            Self::Admin => "Inspection",
        }
    }
    fn emoji(&self) -> &'static str {
        match self {
            Self::CheckIn => "📅",
            Self::General => "🔧",
            Self::Admin => "🛡️",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static [&'static str],
    details: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "blast",
        description: "Daily check-in, once per calendar day.",
        usage: &["blast"],
        details: "Day 1 of a streak pays 5 credits, days 2-6 pay 10, days 7-19 pay 15, and day 20 onward pays 20. Missing a single day starts a fresh streak.",
        category: CommandCategory::CheckIn,
    },
    CommandInfo {
        name: "credit",
        description: "Shows your total credits and current streak.",
        usage: &["credit"],
        details: "Total credits never go down. The streak only counts while your latest check-in is from today or yesterday.",
        category: CommandCategory::CheckIn,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: &["help", "help <command>"],
        details: "Pick a command from the dropdown or pass its name for details.",
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "debug",
        description: "Read-only view of stored check-ins and the computed streak.",
        usage: &["debug", "debug @user"],
        details: "Lists raw records, how each one was read, and the streak segments they form. Inspecting someone else requires administrator rights.",
        category: CommandCategory::Admin,
    },
];

pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Shows information about commands")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "command",
                "The specific command you want help with",
            )
            .required(false),
        )
}

fn create_command_select_menu() -> CreateActionRow {
    let options = COMMANDS
        .iter()
        .map(|cmd| CreateSelectMenuOption::new(cmd.name, cmd.name).description(cmd.description))
        .collect();
    let select_menu =
        CreateSelectMenu::new(HELP_SELECT_ID, CreateSelectMenuKind::String { options })
            .placeholder("Select a command for more details...");
    CreateActionRow::SelectMenu(select_menu)
}

pub fn create_help_embed(prefix: &str, command_name_opt: Option<&str>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .footer(CreateEmbedFooter::new(format!("Current Prefix: {}", prefix)))
        .color(0x5865F2);

    match command_name_opt {
        Some(name) => {
            if let Some(cmd) = COMMANDS.iter().find(|c| c.name == name) {
                let usage_string = cmd
                    .usage
                    .iter()
                    .map(|u| format!("`/{}` or `{}{}`", u, prefix, u))
                    .collect::<Vec<_>>()
                    .join("\n");
                embed = embed
                    .title(format!("{} Command: {}", cmd.category.emoji(), cmd.name))
                    .field("Description", cmd.description, false)
                    .field("Usage", usage_string, false)
                    .field("Details", cmd.details, false);
            } else {
                embed = embed
                    .title("Command Not Found")
                    .description(format!("Sorry, I don't know a command called `{}`.", name))
                    .color(0xFF0000);
            }
        }
        None => {
            embed = embed.title("Help Menu").description(format!(
                "Check in every day to grow your streak. For details, use `{}help <command>` or pick one below.",
                prefix
            ));
            for category in [
                CommandCategory::CheckIn,
                CommandCategory::General,
                CommandCategory::Admin,
            ] {
                let command_list = get_commands_in_category(category);
                if !command_list.is_empty() {
                    embed = embed.field(
                        format!("{} {}", category.emoji(), category.name()),
                        command_list,
                        false,
                    );
                }
            }
        }
    }
    embed
}

fn get_commands_in_category(category: CommandCategory) -> String {
    COMMANDS
        .iter()
        .filter(|c| c.category == category)
        .map(|c| format!("`{}`", c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

async fn current_prefix(ctx: &Context) -> String {
    AppState::from_ctx(ctx)
        .await
        .map(|state| state.config.prefix.clone())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string())
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let command_name = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str());
    let embed = create_help_embed(&current_prefix(ctx).await, command_name);
    let mut builder = CreateInteractionResponseMessage::new().embed(embed);
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn handle_interaction(ctx: &Context, interaction: &ComponentInteraction) {
    let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
        return;
    };
    let Some(selected_command) = values.first() else {
        return;
    };
    let embed = create_help_embed(&current_prefix(ctx).await, Some(selected_command.as_str()));
    interaction.defer(&ctx.http).await.ok();
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(vec![]);
    interaction.edit_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let command_name = args.first().copied();
    let embed = create_help_embed(&current_prefix(ctx).await, command_name);
    let mut builder = CreateMessage::new().embed(embed).reference_message(msg);
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
