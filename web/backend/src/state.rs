use crate::aggregate::Aggregator;
use crate::cache::{TtlCache, UpstreamFetcher};
use crate::config::Config;
use crate::proxy::GenericProxy;
use crate::youtube::MetadataProxy;
use reqwest::Client;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub aggregator: Aggregator,
    pub proxy: GenericProxy,
    pub youtube: MetadataProxy,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        Self::with_cache(config, Arc::new(TtlCache::new()))
    }

    /// Aggregator and proxy share `cache` through one fetcher.
    pub fn with_cache(config: Config, cache: Arc<TtlCache>) -> Result<Self, reqwest::Error> {
        let fetcher = UpstreamFetcher::new(Client::builder().build()?, cache);
        let youtube = MetadataProxy::new(&config)?;

        Ok(Self {
            aggregator: Aggregator::new(fetcher.clone(), config.primary_base.clone()),
            proxy: GenericProxy::new(fetcher, config.primary_base.clone()),
            youtube,
            config,
        })
    }
}
