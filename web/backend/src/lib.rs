pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod proxy;
pub mod state;
pub mod youtube;

use axum::{Router, routing::get};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/combined", get(handlers::combined))
        .route("/api/combines", get(handlers::combined))
        .route("/api/search", get(handlers::search))
        .route("/api/recherche", get(handlers::search))
        .route("/api/artist/", get(handlers::missing_artist_id))
        .route("/api/artiste/", get(handlers::missing_artist_id))
        .route("/api/artist/:id", get(handlers::artist_by_id))
        .route("/api/artiste/:id", get(handlers::artist_by_id))
        .route("/api/artist/:id/videos", get(handlers::artist_videos))
        .route("/yt", get(handlers::youtube_root))
        .route("/yt/", get(handlers::youtube_root))
        .route("/yt/search", get(handlers::youtube_search))
        .route("/yt/videos", get(handlers::youtube_videos))
        .fallback(handlers::upstream_proxy)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
