//! Feed retrieval port.
//!
//! Retrieval is the only I/O in a run. The classification core consumes
//! whatever a [`FeedFetcher`] returns and tolerates any source failing.

use async_trait::async_trait;

use crate::domain::RawItem;
use crate::error::FetchError;
use crate::infrastructure::config::source::SourceConfig;

/// Retrieves the current entries of one feed.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; sources are fetched concurrently
/// through a shared fetcher.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch a source's entries in feed order.
    ///
    /// Entries missing a title or link are still returned (with empty
    /// fields) so they are counted as raw items.
    async fn fetch(&self, source: &SourceConfig) -> Result<Vec<RawItem>, FetchError>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}
