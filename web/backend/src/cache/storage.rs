use crate::cache::clock::{Clock, SystemClock};
use crate::cache::types::{CACHE_TTL, CacheEntry, CacheKey, Payload};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// URL-keyed response cache with a fixed time-to-live.
///
/// Every operation takes the single lock for the duration of one map access.
/// Expired entries are never swept; they read as misses and are overwritten by
/// the next successful fetch of the same URL.
pub struct TtlCache {
    entries: Mutex<FxHashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::with_clock(CACHE_TTL, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            ttl,
            clock,
        }
    }

    /// Returns a copy of the entry if it has not expired yet.
    pub fn get(&self, key: &str) -> Option<Payload> {
        let entries = self.lock();
        let now = self.clock.now();
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| Payload {
                bytes: entry.payload.clone(),
                content_type: entry.content_type.clone(),
            })
    }

    /// Stores `payload` under `key`, expiring one TTL from now.
    pub fn put(&self, key: CacheKey, payload: Payload) {
        let mut entries = self.lock();
        let expires_at = self.clock.now() + self.ttl;
        entries.insert(
            key,
            CacheEntry {
                payload: payload.bytes,
                content_type: payload.content_type,
                expires_at,
            },
        );
    }

    /// Expiry of the stored entry, fresh or not.
    pub fn expires_at(&self, key: &str) -> Option<Instant> {
        self.lock().get(key).map(|entry| entry.expires_at)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<CacheKey, CacheEntry>> {
        // Entries are replaced whole, so a poisoned map is still consistent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}
