// verify.rs - Roblox Verification Module (step 1 of 2)
// Implements /verify, which issues a one-time code the user pastes into
// their Roblox profile blurb before running /confirm.
//
// Key Features:
// - Generates a 6-character code from uppercase letters and digits
// - Records the pending verification in a process-local store
//
// Used by: commands/mod.rs (built-in manifest), confirm.rs (shared store)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::Rng;
use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use super::{CommandContext, CommandEntry, CommandError, CommandReply, SlashCommand};

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;

/// A verification started by /verify, waiting on /confirm. The entry stays
/// in place after a successful confirm so the user can re-run it.
#[derive(Debug, Clone)]
pub struct PendingVerification {
    pub code: String,
    pub roblox_username: String,
}

/// Pending verifications keyed by Discord user id. In-memory only; a
/// restart clears it.
pub type PendingVerifications = Arc<Mutex<HashMap<u64, PendingVerification>>>;

pub struct Verify {
    pending: PendingVerifications,
}

impl Verify {
    pub fn new(pending: PendingVerifications) -> Self {
        Self { pending }
    }
}

pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

#[async_trait]
impl SlashCommand for Verify {
    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand {
        command
            .name("verify")
            .description("Link your Roblox account")
            .create_option(|option| {
                option
                    .name("username")
                    .description("Your Roblox username")
                    .kind(CommandOptionType::String)
                    .required(true)
            })
    }

    async fn run(&self, ctx: &CommandContext) -> Result<CommandReply, CommandError> {
        let username = match ctx.options.get("username") {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Ok(CommandReply::ephemeral("Please provide your Roblox username!")),
        };

        let code = generate_code();
        {
            let mut pending = self
                .pending
                .lock()
                .map_err(|_| "pending verification store is poisoned")?;
            pending.insert(
                ctx.invoker.id,
                PendingVerification {
                    code: code.clone(),
                    roblox_username: username,
                },
            );
        }

        Ok(CommandReply::plain(format!(
            "To verify, paste this code in your Roblox **profile blurb**: `{}`.\nThen type `/confirm`.",
            code
        )))
    }
}

pub fn entry(pending: PendingVerifications) -> CommandEntry {
    (module_path!(), Arc::new(Verify::new(pending)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandOptions, Invoker};

    fn ctx(id: u64, username: Option<&str>) -> CommandContext {
        let mut options = CommandOptions::default();
        if let Some(name) = username {
            options.insert("username", name);
        }
        CommandContext::new(
            Invoker {
                id,
                name: "tester".to_string(),
            },
            options,
        )
    }

    #[test]
    fn codes_are_six_chars_from_the_charset() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)), "bad code {}", code);
        }
    }

    #[tokio::test]
    async fn verify_records_the_pending_entry_and_shares_the_code() {
        let pending = PendingVerifications::default();
        let verify = Verify::new(Arc::clone(&pending));

        let reply = verify.run(&ctx(42, Some("builderman"))).await.unwrap();

        let store = pending.lock().unwrap();
        let entry = store.get(&42).expect("pending entry recorded");
        assert_eq!(entry.roblox_username, "builderman");
        assert!(reply.content.contains(&entry.code));
        assert!(reply.content.contains("/confirm"));
        assert!(!reply.ephemeral);
    }

    #[tokio::test]
    async fn verify_overwrites_an_earlier_attempt() {
        let pending = PendingVerifications::default();
        let verify = Verify::new(Arc::clone(&pending));

        verify.run(&ctx(42, Some("first_name"))).await.unwrap();
        verify.run(&ctx(42, Some("second_name"))).await.unwrap();

        let store = pending.lock().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&42).unwrap().roblox_username, "second_name");
    }

    #[tokio::test]
    async fn verify_without_a_username_asks_for_one() {
        let pending = PendingVerifications::default();
        let verify = Verify::new(Arc::clone(&pending));

        let reply = verify.run(&ctx(42, None)).await.unwrap();
        assert!(reply.ephemeral);
        assert_eq!(reply.content, "Please provide your Roblox username!");
        assert!(pending.lock().unwrap().is_empty());
    }
}
