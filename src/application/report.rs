//! Result of one pipeline run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Buckets, MarketMood, RunSummary, SalienceReport, SourceFailure};

/// Everything a renderer needs: the overall reading, four ranked buckets,
/// hot topics, counts and the list of sources that failed.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub summary: RunSummary,
    /// Sum of all bucketed scores.
    pub net_score: Decimal,
    pub mood: MarketMood,
    pub buckets: Buckets,
    pub salience: SalienceReport,
    pub failures: Vec<SourceFailure>,
}

impl Report {
    /// True when no headline made it into a bucket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// True when every configured source failed.
    #[must_use]
    pub fn all_sources_failed(&self) -> bool {
        self.summary.sources_total > 0 && self.summary.sources_failed == self.summary.sources_total
    }
}
