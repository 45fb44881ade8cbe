// main.rs - Command Bot Entrypoint
// Boot order: logger, environment config, command registry, Discord client.
// Remote registration runs beside the gateway connection so a registration
// failure never keeps the dispatcher from starting.

use std::sync::Arc;

use serenity::client::Client;
use serenity::prelude::GatewayIntents;
use tokio::signal;

use roblox_bridge_bot::commands;
use roblox_bridge_bot::config::BotConfig;
use roblox_bridge_bot::handler::Handler;
use roblox_bridge_bot::publisher;
use roblox_bridge_bot::registry::CommandRegistry;

#[tokio::main]
async fn main() {
    // Initialize logger - must be done before any logging calls
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Configuration error: {}", e);
            eprintln!("❌ Configuration error: {}", e);
            eprintln!("Set TOKEN, CLIENT_ID and GUILD_ID in the environment.");
            return;
        }
    };

    let registry = Arc::new(CommandRegistry::load(commands::built_in()));
    log::info!("📋 Loaded {} slash commands", registry.len());

    let mut client = match Client::builder(&config.token, GatewayIntents::GUILDS)
        .application_id(config.client_id)
        .event_handler(Handler::new(Arc::clone(&registry)))
        .await
    {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Error creating Discord client: {:?}", e);
            eprintln!("❌ Error creating Discord client: {:?}", e);
            eprintln!("Check the TOKEN environment variable.");
            return;
        }
    };

    // One-shot guild registration, concurrent with the gateway login.
    let http = Arc::clone(&client.cache_and_http.http);
    let guild_id = config.guild_id;
    let publish_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        publisher::sync_guild_commands(&http, guild_id, &publish_registry).await;
    });

    log::info!("🚀 Bot is running... press Ctrl+C to stop");
    tokio::select! {
        _ = signal::ctrl_c() => {
            log::info!("⏹️  Stopping bot gracefully...");
        }
        result = client.start() => {
            if let Err(why) = result {
                log::error!("❌ Client error: {:?}", why);
                eprintln!("❌ Client error: {:?}", why);
            }
        }
    }

    log::info!("✅ Bot stopped");
}
