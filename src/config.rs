// config.rs - Environment Configuration
// Reads the process environment once at startup and hands each binary a
// plain struct. A missing or malformed variable is a hard startup error,
// never a runtime surprise.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {name} must be a numeric id, got {value:?}")]
    InvalidId { name: &'static str, value: String },
}

/// Settings for the slash-command bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token.
    pub token: String,
    /// Application id the token belongs to.
    pub client_id: u64,
    /// Guild the command set is registered against.
    pub guild_id: u64,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token: require("TOKEN")?,
            client_id: require_id("CLIENT_ID")?,
            guild_id: require_id("GUILD_ID")?,
        })
    }
}

/// Settings for the group-info proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Open Cloud API key sent upstream as x-api-key.
    pub api_key: String,
    /// Group the proxy serves info for.
    pub group_id: String,
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require("ROBLOX_API_KEY")?,
            group_id: require("ROBLOX_GROUP_ID")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn require_id(name: &'static str) -> Result<u64, ConfigError> {
    let value = require(name)?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidId { name, value })
}
