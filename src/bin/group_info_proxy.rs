// group_info_proxy.rs - Group Info Proxy Entrypoint
// Reads the upstream credentials from the environment and serves the single
// /group-info route until the process is stopped.

use std::net::SocketAddr;
use std::sync::Arc;

use roblox_bridge_bot::config::ProxyConfig;
use roblox_bridge_bot::proxy::{self, ProxyState, PROXY_PORT};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = match ProxyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Configuration error: {}", e);
            eprintln!("❌ Configuration error: {}", e);
            eprintln!("Set ROBLOX_API_KEY and ROBLOX_GROUP_ID in the environment.");
            return;
        }
    };

    let state = Arc::new(ProxyState::new(config));
    let app = proxy::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], PROXY_PORT));
    log::info!("🚀 Server is running at http://localhost:{}", PROXY_PORT);

    if let Err(e) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        log::error!("❌ Server error: {}", e);
        eprintln!("❌ Server error: {}", e);
    }
}
