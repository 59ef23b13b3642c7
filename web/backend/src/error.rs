use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use std::fmt;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{body}")]
    Status {
        status: u16,
        body: String,
        content_type: String,
    },
}

impl UpstreamError {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        // Drop the query string; metadata URLs carry the credential there.
        let url = url.split('?').next().unwrap_or(url).to_string();
        Self::Transport {
            url,
            source: source.without_url(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Artists,
    Relations,
}

impl Dataset {
    pub fn path(self) -> &'static str {
        match self {
            Self::Artists => "/artists",
            Self::Relations => "/relation",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artists => f.write_str("artists"),
            Self::Relations => f.write_str("relations"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("load task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// One of the two parallel loads failed; nothing partial is returned.
#[derive(Debug, Error)]
#[error("failed to load {which}: {cause}")]
pub struct AggregationError {
    pub which: Dataset,
    #[source]
    pub cause: DatasetError,
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("YouTube API key missing. Set YT_API_KEY or YOUTUBE_API_KEY.")]
    MissingCredential,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors as seen at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("artist not found")]
    NotFound,

    #[error("artist id required")]
    MissingId,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Aggregation(err) => {
                warn!(error = %err, "aggregation failed");
                (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
            }
            Self::Upstream(err) => upstream_response(err),
            Self::Metadata(MetadataError::Upstream(err)) => upstream_response(err),
            Self::Metadata(err @ MetadataError::MissingCredential) => {
                warn!("metadata request rejected: no API key configured");
                (StatusCode::SERVICE_UNAVAILABLE, err.to_string()).into_response()
            }
            Self::Metadata(err @ MetadataError::Decode(_)) => {
                (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::MissingId => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
        }
    }
}

/// Upstream status errors are relayed with their own status and body.
fn upstream_response(err: UpstreamError) -> Response {
    match err {
        UpstreamError::Status {
            status,
            body,
            content_type,
        } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, [(CONTENT_TYPE, content_type)], body).into_response()
        }
        err @ UpstreamError::Transport { .. } => {
            warn!(error = %err, "upstream unreachable");
            (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
        }
    }
}
