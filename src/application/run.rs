//! One end-to-end scan: concurrent fetch, then sequential classification.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::future::join_all;
use tokio::time::timeout;
use tracing::{info, warn};

use super::pipeline::{Pipeline, SourceBatch};
use super::report::Report;
use crate::error::FetchError;
use crate::infrastructure::config::source::SourceConfig;
use crate::port::FeedFetcher;

/// A configured scan over a fixed set of sources.
///
/// Sources are fetched concurrently. Their batches are then reassembled in
/// configured source order before classification, so dedup and tie-breaking
/// do not depend on which feed answered first.
pub struct NewsRun {
    fetcher: Arc<dyn FeedFetcher>,
    sources: Vec<SourceConfig>,
    pipeline: Pipeline,
    timeout: Duration,
    max_items_per_source: usize,
}

impl NewsRun {
    pub fn new(
        fetcher: Arc<dyn FeedFetcher>,
        sources: Vec<SourceConfig>,
        pipeline: Pipeline,
    ) -> Self {
        Self {
            fetcher,
            sources,
            pipeline,
            timeout: Duration::from_secs(15),
            max_items_per_source: 0,
        }
    }

    /// Upper bound on a single source's fetch, retries included.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Keep at most `max` entries per source (0 keeps everything).
    #[must_use]
    pub fn with_max_items_per_source(mut self, max: usize) -> Self {
        self.max_items_per_source = max;
        self
    }

    #[must_use]
    pub fn sources(&self) -> &[SourceConfig] {
        &self.sources
    }

    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Fetch every source and classify the combined result.
    ///
    /// Never fails: a source that errors or times out is reported in
    /// [`Report::failures`] and the rest of the run proceeds.
    pub async fn execute(&self) -> Report {
        info!(
            fetcher = self.fetcher.name(),
            sources = self.sources.len(),
            "Fetching sources"
        );

        let batches = self.fetch_all().await;
        let report = self.pipeline.process(batches, Utc::now());

        if report.all_sources_failed() {
            warn!(failed = report.summary.sources_failed, "Every source failed");
        }
        report
    }

    async fn fetch_all(&self) -> Vec<SourceBatch> {
        let futures: Vec<_> = self
            .sources
            .iter()
            .map(|source| async move { self.fetch_one(source).await })
            .collect();

        // join_all preserves input order regardless of completion order.
        join_all(futures).await
    }

    async fn fetch_one(&self, source: &SourceConfig) -> SourceBatch {
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let result = match timeout(self.timeout, self.fetcher.fetch(source)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout { timeout_ms }),
        };

        match result {
            Ok(mut items) => {
                if self.max_items_per_source > 0 {
                    items.truncate(self.max_items_per_source);
                }
                info!(source = %source.id, items = items.len(), "Fetched source");
                SourceBatch::ok(source.id.clone(), items)
            }
            Err(error) => SourceBatch::failed(source.id.clone(), error),
        }
    }
}

impl std::fmt::Debug for NewsRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsRun")
            .field("fetcher", &self.fetcher.name())
            .field("sources", &self.sources.len())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
