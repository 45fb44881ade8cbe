// proxy.rs - Group Info Proxy
// The single-route HTTP server that fronts the Roblox groups API: one GET
// in, one reshaped JSON object out. The caller never sees upstream bodies
// or statuses; every failure collapses to the same 500 payload while the
// details go to the log.
//
// Used by: bin/group_info_proxy.rs

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::config::ProxyConfig;
use crate::roblox::{Group, GroupClient};

/// Port the proxy listens on.
pub const PROXY_PORT: u16 = 3000;

/// Reply body for GET /group-info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupInfo {
    pub name: String,
    pub description: String,
    /// Owner display name, or "N/A" when the group has no owner.
    pub owner: String,
}

impl From<Group> for GroupInfo {
    fn from(group: Group) -> Self {
        Self {
            name: group.name,
            description: group.description,
            owner: group
                .owner
                .map(|owner| owner.display_name)
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Shared state behind the route handlers.
pub struct ProxyState {
    groups: GroupClient,
    group_id: String,
}

impl ProxyState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            groups: GroupClient::new(config.api_key),
            group_id: config.group_id,
        }
    }

    /// State pointed at a non-default upstream host.
    pub fn with_upstream(config: ProxyConfig, base_url: impl Into<String>) -> Self {
        Self {
            groups: GroupClient::with_base_url(config.api_key, base_url),
            group_id: config.group_id,
        }
    }
}

/// Build the router. /group-info is the only route; everything else is the
/// framework's 404.
pub fn router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/group-info", get(group_info))
        .with_state(state)
}

async fn group_info(State(state): State<Arc<ProxyState>>) -> Response {
    match state.groups.group_info(&state.group_id).await {
        Ok(group) => (StatusCode::OK, Json(GroupInfo::from(group))).into_response(),
        Err(e) => {
            log::error!("❌ Failed to fetch group info: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch group info." })),
            )
                .into_response()
        }
    }
}
