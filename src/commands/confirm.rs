// confirm.rs - Roblox Verification Module (step 2 of 2)
// Implements /confirm, which looks up the Roblox profile named in the
// pending verification and checks the blurb for the code /verify issued.
//
// Used by: commands/mod.rs (built-in manifest)

use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;

use crate::roblox::{RobloxError, UserClient};

use super::verify::PendingVerifications;
use super::{CommandContext, CommandEntry, CommandError, CommandReply, SlashCommand};

pub struct Confirm {
    pending: PendingVerifications,
    roblox: UserClient,
}

impl Confirm {
    pub fn new(pending: PendingVerifications, roblox: UserClient) -> Self {
        Self { pending, roblox }
    }
}

#[async_trait]
impl SlashCommand for Confirm {
    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand {
        command
            .name("confirm")
            .description("Finish linking your Roblox account")
    }

    async fn run(&self, ctx: &CommandContext) -> Result<CommandReply, CommandError> {
        let pending = {
            let store = self
                .pending
                .lock()
                .map_err(|_| "pending verification store is poisoned")?;
            store.get(&ctx.invoker.id).cloned()
        };
        let pending = match pending {
            Some(entry) => entry,
            None => {
                return Ok(CommandReply::plain(
                    "You need to run `/verify <username>` first.",
                ))
            }
        };

        let user_id = match self.roblox.user_id(&pending.roblox_username).await {
            Ok(id) => id,
            Err(RobloxError::Status { .. }) => {
                return Ok(CommandReply::plain("Roblox username not found."))
            }
            Err(e) => return Err(e.into()),
        };

        let blurb = match self.roblox.profile_description(user_id).await {
            Ok(text) => text,
            Err(RobloxError::Status { .. }) => {
                return Ok(CommandReply::plain("Could not fetch profile."))
            }
            Err(e) => return Err(e.into()),
        };

        if blurb.contains(&pending.code) {
            Ok(CommandReply::plain(format!(
                "✅ Successfully verified! Your Roblox account `{}` is now linked.",
                pending.roblox_username
            )))
        } else {
            Ok(CommandReply::plain(
                "❌ Verification failed. Make sure the code is in your **profile description (blurb)**.",
            ))
        }
    }
}

pub fn entry(pending: PendingVerifications, roblox: UserClient) -> CommandEntry {
    (module_path!(), Arc::new(Confirm::new(pending, roblox)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::verify::PendingVerification;
    use crate::commands::{CommandOptions, Invoker};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn(app: Router) -> String {
        let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
            .serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        format!("http://{}", addr)
    }

    fn roblox_mock(blurb: &'static str) -> Router {
        Router::new()
            .route(
                "/users/get-by-username",
                get(|| async { Json(json!({ "Id": 42 })) }),
            )
            .route(
                "/v1/users/:id",
                get(move || async move { Json(json!({ "description": blurb })) }),
            )
    }

    fn ctx(id: u64) -> CommandContext {
        CommandContext::new(
            Invoker {
                id,
                name: "tester".to_string(),
            },
            CommandOptions::default(),
        )
    }

    fn store_with(id: u64, code: &str, username: &str) -> PendingVerifications {
        let pending = PendingVerifications::default();
        pending.lock().unwrap().insert(
            id,
            PendingVerification {
                code: code.to_string(),
                roblox_username: username.to_string(),
            },
        );
        pending
    }

    #[tokio::test]
    async fn confirm_without_verify_points_at_verify() {
        let base = spawn(roblox_mock("irrelevant")).await;
        let confirm = Confirm::new(
            PendingVerifications::default(),
            UserClient::with_base_urls(&base, &base),
        );

        let reply = confirm.run(&ctx(1)).await.unwrap();
        assert_eq!(reply.content, "You need to run `/verify <username>` first.");
    }

    #[tokio::test]
    async fn confirm_succeeds_when_the_blurb_holds_the_code() {
        let base = spawn(roblox_mock("my blurb with ABC123 inside")).await;
        let confirm = Confirm::new(
            store_with(1, "ABC123", "builderman"),
            UserClient::with_base_urls(&base, &base),
        );

        let reply = confirm.run(&ctx(1)).await.unwrap();
        assert!(reply.content.contains("Successfully verified"));
        assert!(reply.content.contains("builderman"));
    }

    #[tokio::test]
    async fn confirm_fails_when_the_code_is_absent() {
        let base = spawn(roblox_mock("no code here")).await;
        let confirm = Confirm::new(
            store_with(1, "ABC123", "builderman"),
            UserClient::with_base_urls(&base, &base),
        );

        let reply = confirm.run(&ctx(1)).await.unwrap();
        assert!(reply.content.contains("Verification failed"));
    }

    #[tokio::test]
    async fn confirm_reports_an_unknown_username() {
        // No routes at all: every lookup comes back 404.
        let base = spawn(Router::new()).await;
        let confirm = Confirm::new(
            store_with(1, "ABC123", "ghost_user"),
            UserClient::with_base_urls(&base, &base),
        );

        let reply = confirm.run(&ctx(1)).await.unwrap();
        assert_eq!(reply.content, "Roblox username not found.");
    }

    #[tokio::test]
    async fn confirm_reports_a_profile_fetch_failure() {
        let app = Router::new().route(
            "/users/get-by-username",
            get(|| async { Json(json!({ "Id": 42 })) }),
        );
        let base = spawn(app).await;
        let confirm = Confirm::new(
            store_with(1, "ABC123", "builderman"),
            UserClient::with_base_urls(&base, &base),
        );

        let reply = confirm.run(&ctx(1)).await.unwrap();
        assert_eq!(reply.content, "Could not fetch profile.");
    }

    #[tokio::test]
    async fn confirm_keeps_the_pending_entry_for_reruns() {
        let base = spawn(roblox_mock("my blurb with ABC123 inside")).await;
        let pending = store_with(1, "ABC123", "builderman");
        let confirm = Confirm::new(Arc::clone(&pending), UserClient::with_base_urls(&base, &base));

        confirm.run(&ctx(1)).await.unwrap();
        let second = confirm.run(&ctx(1)).await.unwrap();

        assert!(second.content.contains("Successfully verified"));
        assert!(pending.lock().unwrap().contains_key(&1));
    }
}
