// commands/mod.rs - Slash Command Modules
// The command contract plus the built-in manifest. Every command declares a
// schema (whose name doubles as its registry key) and an execution
// capability; the manifest pairs each command with a source label so load
// warnings can point at the offending entry.
//
// Used by: registry.rs (loading), dispatcher.rs (execution), publisher.rs
// (remote registration)

pub mod confirm;
pub mod echo;
pub mod ping;
pub mod verify;

use std::collections::HashMap;
use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;

use crate::roblox::UserClient;

/// Error type command execution reports with.
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

/// Contract every command satisfies before it can be registered.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Contribute the declarative schema submitted to Discord. The schema
    /// must carry a non-empty name.
    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand;

    /// Execute one invocation.
    async fn run(&self, ctx: &CommandContext) -> Result<CommandReply, CommandError>;
}

/// Who invoked the command.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub id: u64,
    pub name: String,
}

/// String options parsed out of the interaction payload.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions(HashMap<String, String>);

impl CommandOptions {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Everything a command receives about its invocation. Handed in as an
/// explicit parameter; commands hold no connection state of their own.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub invoker: Invoker,
    pub options: CommandOptions,
}

impl CommandContext {
    pub fn new(invoker: Invoker, options: CommandOptions) -> Self {
        Self { invoker, options }
    }
}

/// What a command wants said back to the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub content: String,
    pub ephemeral: bool,
}

impl CommandReply {
    /// A reply everyone in the channel can see.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    /// A reply only the invoker can see.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

/// A manifest entry: the label warnings identify the command by, plus the
/// command itself.
pub type CommandEntry = (&'static str, Arc<dyn SlashCommand>);

/// Every built-in command, in load order. The pending-verification store is
/// created here so /verify and /confirm share it.
pub fn built_in() -> Vec<CommandEntry> {
    let pending = verify::PendingVerifications::default();
    let roblox = UserClient::new();

    vec![
        ping::entry(),
        echo::entry(),
        verify::entry(Arc::clone(&pending)),
        confirm::entry(pending, roblox),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandRegistry;

    #[test]
    fn built_in_manifest_loads_cleanly() {
        let entries = built_in();
        let expected = entries.len();
        let registry = CommandRegistry::load(entries);

        assert_eq!(registry.len(), expected);
        for name in ["ping", "echo", "verify", "confirm"] {
            assert!(registry.get(name).is_some(), "missing command {}", name);
        }
    }

    #[test]
    fn command_options_are_keyed_by_name() {
        let mut options = CommandOptions::default();
        options.insert("message", "hello");

        assert_eq!(options.get("message"), Some("hello"));
        assert_eq!(options.get("missing"), None);
    }
}
