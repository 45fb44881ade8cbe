// dispatcher.rs - Interaction Dispatch
// Maps one incoming invocation to at most one reply. Unknown names are
// ignored without a reply; a failing command is logged and answered with
// the fixed error text, never the error itself.
//
// Used by: handler.rs

use crate::commands::{CommandContext, CommandReply};
use crate::registry::CommandRegistry;

/// Reply sent when a command's execution fails.
pub const EXECUTION_ERROR_REPLY: &str = "There was an error while executing this command!";

/// Run one invocation against the registry. Returns the reply to send, or
/// None when the event should be ignored entirely.
pub async fn run_invocation(
    registry: &CommandRegistry,
    name: &str,
    ctx: &CommandContext,
) -> Option<CommandReply> {
    let command = registry.get(name)?;

    match command.run(ctx).await {
        Ok(reply) => Some(reply),
        Err(e) => {
            log::error!(
                "❌ Command '{}' failed for user {} ({}): {:?}",
                name,
                ctx.invoker.name,
                ctx.invoker.id,
                e
            );
            Some(CommandReply::ephemeral(EXECUTION_ERROR_REPLY))
        }
    }
}
