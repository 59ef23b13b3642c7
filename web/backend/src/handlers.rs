use crate::cache::Payload;
use crate::error::AppError;
use crate::models::{EndpointsResponse, HealthResponse};
use crate::state::AppState;
use crate::youtube::{QueryParams, Video};
use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State},
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use groupie_core::{CombinedRecord, filter, find_by_id};
use std::sync::Arc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Groupie API is running".to_string(),
    })
}

pub async fn combined(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CombinedRecord>>, AppError> {
    Ok(Json(state.aggregator.aggregate().await?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<CombinedRecord>>, AppError> {
    let records = state.aggregator.aggregate().await?;
    Ok(Json(filter(&records, first_param(&params, "q"))))
}

pub async fn artist_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CombinedRecord>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::MissingId);
    }

    let records = state.aggregator.aggregate().await?;
    find_by_id(&records, &id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound)
}

pub async fn missing_artist_id() -> AppError {
    AppError::MissingId
}

pub async fn artist_videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Video>>, AppError> {
    let records = state.aggregator.aggregate().await?;
    let artist = find_by_id(&records, &id).ok_or(AppError::NotFound)?;
    Ok(Json(state.youtube.artist_videos(artist.name()).await?))
}

/// Every `/api` path without a dedicated route goes to the primary upstream.
pub async fn upstream_proxy(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, AppError> {
    let Some(sub_path) = uri.path().strip_prefix("/api") else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    if !sub_path.is_empty() && !sub_path.starts_with('/') {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let target = match uri.query() {
        Some(query) => format!("{sub_path}?{query}"),
        None => sub_path.to_string(),
    };
    Ok(payload_response(state.proxy.proxy(&target).await?))
}

pub async fn youtube_root(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    state.youtube.api_key()?;
    Ok(Json(EndpointsResponse {
        endpoints: "/yt/search",
    })
    .into_response())
}

pub async fn youtube_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Response, AppError> {
    Ok(payload_response(state.youtube.search(&params).await?))
}

pub async fn youtube_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Response, AppError> {
    Ok(payload_response(state.youtube.videos(&params).await?))
}

/// First value of a repeated parameter; absent reads as empty.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> &'a str {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

fn payload_response(payload: Payload) -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, payload.content_type)],
        payload.bytes,
    )
        .into_response()
}
