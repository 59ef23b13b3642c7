use std::time::{Duration, Instant};

pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Fully resolved outbound URL, query string included.
pub type CacheKey = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub payload: Vec<u8>,
    pub content_type: String,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// A response body together with the content type it was served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}
