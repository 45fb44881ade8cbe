// publisher.rs - Remote Command Registration
// Pushes every loaded schema to Discord's guild-scoped command registry in
// one bulk-overwrite call. Best effort: a failure is logged and the bot
// keeps serving whatever command set Discord already holds.
//
// Used by: main.rs (spawned at startup)

use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::id::GuildId;

use crate::registry::CommandRegistry;

/// Replace the guild's command set with the registry's schemas. One call,
/// full-replace semantics, no retry.
pub async fn sync_guild_commands(http: &Http, guild_id: u64, registry: &CommandRegistry) {
    log::info!("🔄 Refreshing {} guild slash commands...", registry.len());

    let result = GuildId(guild_id)
        .set_application_commands(http, |commands| {
            for command in registry.iter() {
                let mut schema = CreateApplicationCommand::default();
                command.register(&mut schema);
                commands.add_application_command(schema);
            }
            commands
        })
        .await;

    match result {
        Ok(commands) => {
            log::info!("✅ Registered {} slash commands with Discord", commands.len());
        }
        Err(e) => {
            log::error!("❌ Failed to register guild slash commands: {}", e);
        }
    }
}
