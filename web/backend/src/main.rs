use groupie_web::config::Config;
use groupie_web::router;
use groupie_web::state::AppState;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    if config.youtube_api_key.is_none() {
        warn!("no YouTube API key configured, /yt endpoints will answer 503");
    }
    let bind_addr = config.bind_addr();

    let app_state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to initialize app state: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", bind_addr);

    if let Err(e) = axum::serve(listener, router(app_state)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
