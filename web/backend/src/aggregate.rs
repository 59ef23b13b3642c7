use crate::cache::UpstreamFetcher;
use crate::error::{AggregationError, Dataset, DatasetError};
use groupie_core::{CombinedRecord, PerformerRecord, RelationIndex, combine};
use serde::de::DeserializeOwned;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

/// Loads the performer list and the relation index side by side and joins them.
#[derive(Clone)]
pub struct Aggregator {
    fetcher: UpstreamFetcher,
    base: String,
}

impl Aggregator {
    pub fn new(fetcher: UpstreamFetcher, base: impl Into<String>) -> Self {
        Self {
            fetcher,
            base: base.into(),
        }
    }

    /// Both loads must succeed. When both fail, the performer error is reported.
    ///
    /// Each load runs in its own task, so dropping the returned future does not
    /// cancel the upstream fetches; they still complete and fill the cache.
    pub async fn aggregate(&self) -> Result<Vec<CombinedRecord>, AggregationError> {
        let performers = self.spawn_load::<Vec<PerformerRecord>>(Dataset::Artists);
        let relations = self.spawn_load::<RelationIndex>(Dataset::Relations);
        let (performers, relations) = tokio::join!(performers, relations);

        let performers = settle(Dataset::Artists, performers)?;
        let relations = settle(Dataset::Relations, relations)?;

        let combined = combine(performers, &relations);
        info!(
            artists = combined.len(),
            relations = relations.index.len(),
            "combined artist data"
        );
        Ok(combined)
    }

    fn spawn_load<T>(&self, which: Dataset) -> JoinHandle<Result<T, AggregationError>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let this = self.clone();
        tokio::spawn(async move { this.load::<T>(which).await })
    }

    async fn load<T: DeserializeOwned>(&self, which: Dataset) -> Result<T, AggregationError> {
        let url = format!("{}{}", self.base, which.path());
        let decoded = async {
            let payload = self.fetcher.fetch(&url).await?;
            Ok::<T, DatasetError>(serde_json::from_slice(&payload.bytes)?)
        }
        .await;

        decoded.map_err(|cause| AggregationError { which, cause })
    }
}

fn settle<T>(
    which: Dataset,
    joined: Result<Result<T, AggregationError>, JoinError>,
) -> Result<T, AggregationError> {
    joined.map_err(|err| AggregationError {
        which,
        cause: DatasetError::Task(err),
    })?
}
