// ping.rs - Ping Command Module
// Implements /ping, the connectivity check. Replies immediately so users can
// confirm the bot is alive and dispatching.
//
// Used by: commands/mod.rs (built-in manifest)

use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;

use super::{CommandContext, CommandEntry, CommandError, CommandReply, SlashCommand};

pub struct Ping;

#[async_trait]
impl SlashCommand for Ping {
    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand {
        command.name("ping").description("Test bot connectivity")
    }

    async fn run(&self, _ctx: &CommandContext) -> Result<CommandReply, CommandError> {
        Ok(CommandReply::plain("Pong!"))
    }
}

pub fn entry() -> CommandEntry {
    (module_path!(), Arc::new(Ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandOptions, Invoker};

    #[tokio::test]
    async fn ping_replies_pong_in_channel() {
        let ctx = CommandContext::new(
            Invoker {
                id: 1,
                name: "tester".to_string(),
            },
            CommandOptions::default(),
        );

        let reply = Ping.run(&ctx).await.unwrap();
        assert_eq!(reply.content, "Pong!");
        assert!(!reply.ephemeral);
    }

    #[test]
    fn ping_schema_declares_its_name() {
        let mut schema = CreateApplicationCommand::default();
        Ping.register(&mut schema);
        assert_eq!(
            schema.0.get("name").and_then(|v| v.as_str()),
            Some("ping")
        );
    }
}
