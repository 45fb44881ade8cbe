// roblox.rs - Roblox Web API Client
// Typed wrappers over the three Roblox endpoints this project calls: the
// Open Cloud group lookup used by the proxy, and the username/profile
// lookups used by the verification commands. Base URLs are constructor
// parameters so tests can point a client at a local upstream.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Host for the Open Cloud groups API.
pub const GROUPS_API_BASE: &str = "https://apis.roblox.com";
/// Host for the legacy username lookup.
pub const LEGACY_API_BASE: &str = "https://api.roblox.com";
/// Host for the users API.
pub const USERS_API_BASE: &str = "https://users.roblox.com";

#[derive(Debug, Error)]
pub enum RobloxError {
    /// Transport failure or undecodable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// One group as the groups API reports it. Only the fields the proxy
/// reshapes are decoded; everything else in the payload is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner: Option<GroupOwner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupOwner {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
struct LegacyUser {
    #[serde(rename = "Id")]
    id: u64,
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    #[serde(default)]
    description: String,
}

/// Client for the groups API. Every request carries the x-api-key header.
#[derive(Debug, Clone)]
pub struct GroupClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GroupClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GROUPS_API_BASE)
    }

    /// Same client pointed at a different host.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch one group by id.
    pub async fn group_info(&self, group_id: &str) -> Result<Group, RobloxError> {
        let response = self
            .client
            .get(format!("{}/groups/v1/groups/{}", self.base_url, group_id))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Client for the user endpoints. No credential required.
#[derive(Debug, Clone)]
pub struct UserClient {
    client: reqwest::Client,
    legacy_base: String,
    users_base: String,
}

impl UserClient {
    pub fn new() -> Self {
        Self::with_base_urls(LEGACY_API_BASE, USERS_API_BASE)
    }

    /// Same client pointed at different hosts.
    pub fn with_base_urls(legacy_base: impl Into<String>, users_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            legacy_base: legacy_base.into(),
            users_base: users_base.into(),
        }
    }

    /// Resolve a username to its numeric user id.
    pub async fn user_id(&self, username: &str) -> Result<u64, RobloxError> {
        let response = self
            .client
            .get(format!("{}/users/get-by-username", self.legacy_base))
            .query(&[("username", username)])
            .send()
            .await?;
        let response = check_status(response).await?;
        let user: LegacyUser = response.json().await?;
        Ok(user.id)
    }

    /// Fetch a user's profile description, the "blurb" shown on their page.
    pub async fn profile_description(&self, user_id: u64) -> Result<String, RobloxError> {
        let response = self
            .client
            .get(format!("{}/v1/users/{}", self.users_base, user_id))
            .send()
            .await?;
        let response = check_status(response).await?;
        let profile: UserProfile = response.json().await?;
        Ok(profile.description)
    }
}

impl Default for UserClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the upstream body on non-success statuses so error logs show what
/// the API actually said.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RobloxError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RobloxError::Status { status, body })
}
