// echo.rs - Echo Command Module
// Implements /echo, which repeats back user input for testing purposes.
//
// Used by: commands/mod.rs (built-in manifest)

use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use super::{CommandContext, CommandEntry, CommandError, CommandReply, SlashCommand};

pub struct Echo;

#[async_trait]
impl SlashCommand for Echo {
    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand {
        command
            .name("echo")
            .description("Echo back your message")
            .create_option(|option| {
                option
                    .name("message")
                    .description("The message to echo")
                    .kind(CommandOptionType::String)
                    .required(true)
            })
    }

    async fn run(&self, ctx: &CommandContext) -> Result<CommandReply, CommandError> {
        // Usage guidance when the option is missing or blank.
        match ctx.options.get("message") {
            Some(text) if !text.trim().is_empty() => Ok(CommandReply::plain(text)),
            _ => Ok(CommandReply::plain("Please provide text to echo!")),
        }
    }
}

pub fn entry() -> CommandEntry {
    (module_path!(), Arc::new(Echo))
}
