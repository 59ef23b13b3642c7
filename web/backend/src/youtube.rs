use crate::cache::Payload;
use crate::cache::fetcher::send;
use crate::config::{Config, METADATA_TIMEOUT};
use crate::error::MetadataError;
use reqwest::Client;
use reqwest::header::REFERER;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SEARCH_DEFAULTS: [(&str, &str); 3] =
    [("part", "snippet"), ("type", "video"), ("maxResults", "3")];
const VIDEOS_DEFAULTS: [(&str, &str); 1] = [("part", "snippet,contentDetails")];
const KEY_PARAM: &str = "key";

/// One query parameter as received from the caller, repeats allowed.
pub type QueryParams = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct ChannelSearchResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    #[serde(default)]
    id: ChannelId,
}

#[derive(Debug, Default, Deserialize)]
struct ChannelId {
    #[serde(rename = "channelId", default)]
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoSearchResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: VideoId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId", default)]
    video_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

/// Live, uncached passthrough to the YouTube Data API. The server-held key is
/// always the last thing written into the outbound query.
#[derive(Clone)]
pub struct MetadataProxy {
    client: Client,
    base: String,
    api_key: Option<String>,
    referer: String,
}

impl MetadataProxy {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(METADATA_TIMEOUT).build()?;
        Ok(Self {
            client,
            base: config.youtube_base.clone(),
            api_key: config.youtube_api_key.clone(),
            referer: config.referer.clone(),
        })
    }

    /// Fails when no key is configured, before any call is made.
    pub fn api_key(&self) -> Result<&str, MetadataError> {
        self.api_key
            .as_deref()
            .ok_or(MetadataError::MissingCredential)
    }

    pub async fn search(&self, params: &[(String, String)]) -> Result<Payload, MetadataError> {
        self.forward("search", params, &SEARCH_DEFAULTS).await
    }

    pub async fn videos(&self, params: &[(String, String)]) -> Result<Payload, MetadataError> {
        self.forward("videos", params, &VIDEOS_DEFAULTS).await
    }

    /// Top embeddable videos of an artist, preferring its official channel.
    pub async fn artist_videos(&self, artist_name: &str) -> Result<Vec<Video>, MetadataError> {
        let channel_query = owned(&[
            ("q", format!("{artist_name} official").as_str()),
            ("type", "channel"),
            ("maxResults", "1"),
            ("part", "snippet"),
        ]);
        let payload = self.forward("search", &channel_query, &[]).await?;
        let channels: ChannelSearchResponse = serde_json::from_slice(&payload.bytes)?;
        let channel_id = channels
            .items
            .into_iter()
            .map(|item| item.id.channel_id)
            .find(|id| !id.is_empty());

        let video_query = match channel_id {
            Some(channel_id) => {
                debug!(artist = artist_name, channel = %channel_id, "found official channel");
                owned(&[
                    ("channelId", channel_id.as_str()),
                    ("type", "video"),
                    ("videoEmbeddable", "true"),
                    ("order", "viewCount"),
                    ("maxResults", "5"),
                    ("part", "snippet"),
                ])
            }
            None => {
                debug!(artist = artist_name, "no official channel, searching audio");
                owned(&[
                    ("q", format!("{artist_name} official audio").as_str()),
                    ("type", "video"),
                    ("videoEmbeddable", "true"),
                    ("maxResults", "5"),
                    ("part", "snippet"),
                ])
            }
        };

        let payload = self.forward("search", &video_query, &[]).await?;
        let found: VideoSearchResponse = serde_json::from_slice(&payload.bytes)?;
        Ok(found
            .items
            .into_iter()
            .filter(|item| !item.id.video_id.is_empty())
            .map(|item| Video {
                id: item.id.video_id,
                title: item.snippet.title,
            })
            .collect())
    }

    /// Outbound query for one call: fails when no key is configured, before
    /// any request is built.
    pub fn outbound_query(
        &self,
        params: &[(String, String)],
        defaults: &[(&str, &str)],
    ) -> Result<Vec<(String, String)>, MetadataError> {
        let key = self.api_key()?;
        Ok(merge_params(params, defaults, key))
    }

    async fn forward(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        defaults: &[(&str, &str)],
    ) -> Result<Payload, MetadataError> {
        let query = self.outbound_query(params, defaults)?;
        let url = format!("{}/{}", self.base.trim_end_matches('/'), endpoint);
        debug!(endpoint, "forwarding metadata request");
        let request = self
            .client
            .get(&url)
            .query(&query)
            .header(REFERER, self.referer.as_str());
        Ok(send(request, &url).await?)
    }
}

/// Inbound parameters first, then defaults for names the caller left out, then
/// the key, replacing any value the caller supplied for it.
pub fn merge_params(
    params: &[(String, String)],
    defaults: &[(&str, &str)],
    key: &str,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = params
        .iter()
        .filter(|(name, _)| name != KEY_PARAM)
        .cloned()
        .collect();

    for (name, value) in defaults {
        let present = merged
            .iter()
            .any(|(existing, current)| existing == name && !current.is_empty());
        if !present {
            merged.retain(|(existing, _)| existing != name);
            merged.push((name.to_string(), value.to_string()));
        }
    }

    merged.push((KEY_PARAM.to_string(), key.to_string()));
    merged
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
