use std::sync::Arc;

use checkin_bot::AppState;
use checkin_bot::config::Config;
use checkin_bot::database::{self, CheckInStore, MemoryCheckInStore, PgCheckInStore};
use checkin_bot::handler::Handler;
use checkin_bot::logging::init_tracing;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // A missing .env is fine; the variables may come from the real environment.
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    let store: Arc<dyn CheckInStore> = match &config.database_url {
        Some(url) => match database::init::connect(url).await {
            Ok(pool) => Arc::new(PgCheckInStore::new(pool)),
            Err(e) => {
                error!(error = %e, "could not connect to the database");
                std::process::exit(1);
            }
        },
        None => {
            warn!("DATABASE_URL not set; check-ins are kept in memory and lost on restart");
            Arc::new(MemoryCheckInStore::new())
        }
    };

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    let handler = Handler {
        allowed_guild_id: config.guild_id,
    };
    let token = config.discord_token.clone();
    let app_state = Arc::new(AppState::new(store, config));

    let mut client = match Client::builder(&token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!(error = ?e, "error creating the Discord client");
            std::process::exit(1);
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    info!("starting Discord client");
    if let Err(why) = client.start().await {
        error!(error = ?why, "client error");
    }
}
