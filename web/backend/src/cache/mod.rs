pub mod clock;
pub mod fetcher;
pub mod storage;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fetcher::UpstreamFetcher;
pub use storage::TtlCache;
pub use types::{CACHE_TTL, CacheEntry, CacheKey, DEFAULT_CONTENT_TYPE, Payload};
