use crate::cache::storage::TtlCache;
use crate::cache::types::{DEFAULT_CONTENT_TYPE, Payload};
use crate::error::UpstreamError;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use tracing::{debug, warn};

/// Cached GET against an upstream. Only responses below 400 are stored.
#[derive(Clone)]
pub struct UpstreamFetcher {
    client: Client,
    cache: Arc<TtlCache>,
}

impl UpstreamFetcher {
    pub fn new(client: Client, cache: Arc<TtlCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    pub async fn fetch(&self, url: &str) -> Result<Payload, UpstreamError> {
        if let Some(hit) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(hit);
        }

        debug!(url, "cache miss, fetching");
        let payload = send_get(&self.client, url).await?;
        self.cache.put(url.to_string(), payload.clone());
        Ok(payload)
    }
}

/// Plain GET with no retry. Status codes of 400 and above become
/// `UpstreamError::Status` with the body kept intact.
pub(crate) async fn send_get(client: &Client, url: &str) -> Result<Payload, UpstreamError> {
    send(client.get(url), url).await
}

pub(crate) async fn send(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<Payload, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|source| UpstreamError::transport(url, source))?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let bytes = response
        .bytes()
        .await
        .map_err(|source| UpstreamError::transport(url, source))?
        .to_vec();

    if status >= 400 {
        warn!(status, "upstream returned an error status");
        return Err(UpstreamError::Status {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
            content_type,
        });
    }

    Ok(Payload {
        bytes,
        content_type,
    })
}
