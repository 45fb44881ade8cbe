// handler.rs - Gateway Event Handler
// The serenity glue between Discord and the dispatcher: connection logging
// plus translation of chat-input interactions into the explicit context
// commands run against. One interaction produces at most one response.
//
// Used by: main.rs (client setup)

use std::sync::Arc;

use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::application::command::CommandType;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;

use crate::commands::{CommandContext, CommandOptions, CommandReply, Invoker};
use crate::dispatcher;
use crate::registry::CommandRegistry;

pub struct Handler {
    registry: Arc<CommandRegistry>,
}

impl Handler {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        log::info!("✅ Bot connected as {}!", ready.user.name);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let command = match interaction {
            Interaction::ApplicationCommand(command) => command,
            _ => return,
        };
        // Only chat-input commands reach the dispatcher; user and message
        // context menus are not served here.
        if command.data.kind != CommandType::ChatInput {
            return;
        }

        let invocation = invocation_context(&command);
        let reply =
            match dispatcher::run_invocation(&self.registry, &command.data.name, &invocation)
                .await
            {
                Some(reply) => reply,
                None => return,
            };

        // A failed send is logged and dropped; the invocation is not rerun.
        if let Err(e) = respond(&ctx, &command, &reply).await {
            log::error!(
                "❌ Failed to respond to '{}' interaction: {}",
                command.data.name,
                e
            );
        }
    }
}

/// Reduce the interaction payload to the explicit context commands receive.
fn invocation_context(command: &ApplicationCommandInteraction) -> CommandContext {
    let mut options = CommandOptions::default();
    for option in &command.data.options {
        if let Some(value) = option.value.as_ref().and_then(|value| value.as_str()) {
            options.insert(option.name.clone(), value);
        }
    }
    CommandContext::new(
        Invoker {
            id: command.user.id.0,
            name: command.user.name.clone(),
        },
        options,
    )
}

/// Send the single interaction response for this invocation.
async fn respond(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    reply: &CommandReply,
) -> serenity::Result<()> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    message.content(&reply.content);
                    if reply.ephemeral {
                        message.ephemeral(true);
                    }
                    message
                })
        })
        .await
}
