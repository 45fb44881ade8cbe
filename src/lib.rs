// lib.rs - Crate Root
// Shared modules behind the two binaries: the slash-command bot
// (roblox-bridge-bot) and the single-route HTTP proxy (group-info-proxy).

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod handler;
pub mod proxy;
pub mod publisher;
pub mod registry;
pub mod roblox;
