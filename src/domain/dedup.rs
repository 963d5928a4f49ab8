//! Run-scoped duplicate detection.
//!
//! A [`Deduplicator`] is the only mutable state in the engine. It is created
//! empty at the start of a run, owned by the pipeline for that run, and
//! dropped when the run finishes. Nothing is persisted between runs.

use std::collections::HashSet;

/// Result of checking an item against the seen sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupVerdict {
    /// First sighting; both keys were recorded.
    Fresh,
    /// The link was already seen.
    DuplicateLink,
    /// A different link carried the same headline fingerprint.
    DuplicateFingerprint,
}

impl DedupVerdict {
    #[must_use]
    pub fn is_fresh(self) -> bool {
        self == Self::Fresh
    }
}

/// Tracks seen links and fingerprints for one pipeline run.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen_links: HashSet<String>,
    seen_fingerprints: HashSet<String>,
}

impl Deduplicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and record an item.
    ///
    /// The link is checked first. State only changes for a fresh item.
    /// An empty fingerprint carries no headline, so it is neither matched
    /// nor recorded; only the link dedups such items.
    pub fn check(&mut self, link: &str, fingerprint: &str) -> DedupVerdict {
        if self.seen_links.contains(link) {
            return DedupVerdict::DuplicateLink;
        }
        if !fingerprint.is_empty() {
            if self.seen_fingerprints.contains(fingerprint) {
                return DedupVerdict::DuplicateFingerprint;
            }
            self.seen_fingerprints.insert(fingerprint.to_string());
        }
        self.seen_links.insert(link.to_string());
        DedupVerdict::Fresh
    }

    /// `true` when the item has not been seen before in this run.
    pub fn accept(&mut self, link: &str, fingerprint: &str) -> bool {
        self.check(link, fingerprint).is_fresh()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen_links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen_links.is_empty()
    }
}
