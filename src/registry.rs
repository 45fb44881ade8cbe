// registry.rs - Command Registry
// Builds the name → command map the dispatcher reads. Each manifest entry
// is validated before insertion: its schema has to declare a usable name.
// The map is written once here and read-only afterwards.
//
// Used by: main.rs (startup), dispatcher.rs, publisher.rs

use std::collections::HashMap;
use std::sync::Arc;

use serenity::builder::CreateApplicationCommand;

use crate::commands::{CommandEntry, SlashCommand};

/// Name → command mapping built once at startup.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn SlashCommand>>,
}

impl CommandRegistry {
    /// Load a manifest of entries. An entry whose schema declares no name is
    /// warned about and skipped; when two entries declare the same name the
    /// last one loaded wins.
    pub fn load(entries: Vec<CommandEntry>) -> Self {
        let mut commands: HashMap<String, Arc<dyn SlashCommand>> = HashMap::new();
        for (source, command) in entries {
            match declared_name(command.as_ref()) {
                Some(name) => {
                    commands.insert(name, command);
                }
                None => {
                    log::warn!(
                        "The command at {} is missing a required schema name; skipping it.",
                        source
                    );
                }
            }
        }
        Self { commands }
    }

    /// Look up a command by its declared name.
    pub fn get(&self, name: &str) -> Option<&dyn SlashCommand> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Every registered command, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SlashCommand>> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the entry's schema and pull out the declared name, if any.
fn declared_name(command: &dyn SlashCommand) -> Option<String> {
    let mut schema = CreateApplicationCommand::default();
    command.register(&mut schema);
    schema
        .0
        .get("name")
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
