//! Per-run counters.

use serde::Serialize;

/// Why an item did not reach the buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    Malformed,
    Stale,
    DuplicateLink,
    DuplicateFingerprint,
    Blacklisted,
    OffTopic,
    ZeroScore,
}

/// A source whose fetch failed. The run continues without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub source_id: String,
    pub reason: String,
}

/// Tallies for one pipeline run.
///
/// `raw_items` counts everything delivered by successful sources,
/// malformed entries included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub sources_total: usize,
    pub sources_failed: usize,
    pub raw_items: usize,
    pub malformed: usize,
    pub stale: usize,
    pub duplicate_links: usize,
    pub duplicate_fingerprints: usize,
    pub blacklisted: usize,
    pub off_topic: usize,
    pub zero_score: usize,
    pub surviving: usize,
}

impl RunSummary {
    /// Items dropped as duplicates by either key.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicate_links + self.duplicate_fingerprints
    }

    pub fn record_drop(&mut self, reason: DropReason) {
        let counter = match reason {
            DropReason::Malformed => &mut self.malformed,
            DropReason::Stale => &mut self.stale,
            DropReason::DuplicateLink => &mut self.duplicate_links,
            DropReason::DuplicateFingerprint => &mut self.duplicate_fingerprints,
            DropReason::Blacklisted => &mut self.blacklisted,
            DropReason::OffTopic => &mut self.off_topic,
            DropReason::ZeroScore => &mut self.zero_score,
        };
        *counter += 1;
    }

    /// Sum of every drop counter.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.malformed
            + self.stale
            + self.duplicates()
            + self.blacklisted
            + self.off_topic
            + self.zero_score
    }
}
