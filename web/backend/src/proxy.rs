use crate::cache::{Payload, UpstreamFetcher};
use crate::error::UpstreamError;

/// Verbatim, cached passthrough to the primary upstream.
#[derive(Clone)]
pub struct GenericProxy {
    fetcher: UpstreamFetcher,
    base: String,
}

impl GenericProxy {
    pub fn new(fetcher: UpstreamFetcher, base: impl Into<String>) -> Self {
        Self {
            fetcher,
            base: base.into(),
        }
    }

    pub fn upstream_url(&self, sub_path: &str) -> String {
        if sub_path.is_empty() || sub_path == "/" {
            return self.base.clone();
        }
        if sub_path.starts_with('/') || sub_path.starts_with('?') {
            format!("{}{}", self.base, sub_path)
        } else {
            format!("{}/{}", self.base, sub_path)
        }
    }

    pub async fn proxy(&self, sub_path: &str) -> Result<Payload, UpstreamError> {
        self.fetcher.fetch(&self.upstream_url(sub_path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use std::sync::Arc;

    fn proxy() -> GenericProxy {
        let fetcher = UpstreamFetcher::new(reqwest::Client::new(), Arc::new(TtlCache::new()));
        GenericProxy::new(fetcher, "https://upstream.test/api")
    }

    #[test]
    fn root_paths_map_to_base() {
        assert_eq!(proxy().upstream_url(""), "https://upstream.test/api");
        assert_eq!(proxy().upstream_url("/"), "https://upstream.test/api");
    }

    #[test]
    fn sub_paths_are_appended() {
        assert_eq!(proxy().upstream_url("/locations"), "https://upstream.test/api/locations");
        assert_eq!(proxy().upstream_url("dates/3"), "https://upstream.test/api/dates/3");
        assert_eq!(
            proxy().upstream_url("/artists?page=2"),
            "https://upstream.test/api/artists?page=2"
        );
    }
}
