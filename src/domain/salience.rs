//! Keyword frequency across the surviving corpus ("hot topics").

use serde::Serialize;

use super::term::TermList;

/// Terms seen fewer times than this are discarded.
pub const DEFAULT_MIN_COUNT: usize = 2;
/// Maximum number of ranked terms returned.
pub const DEFAULT_TOP_N: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalienceEntry {
    pub term: String,
    pub count: usize,
}

/// Ranked term counts plus the maximum count.
///
/// Renderers derive display weight as `count / max_count`; see
/// [`SalienceReport::weight`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalienceReport {
    pub entries: Vec<SalienceEntry>,
    pub max_count: usize,
}

impl SalienceReport {
    /// Relative weight of an entry in `0.0..=1.0`.
    #[must_use]
    pub fn weight(&self, entry: &SalienceEntry) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        entry.count as f64 / self.max_count as f64
    }
}

/// Counts curated terms across titles.
#[derive(Debug, Clone)]
pub struct SalienceAggregator {
    min_count: usize,
    top_n: usize,
}

impl Default for SalienceAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COUNT, DEFAULT_TOP_N)
    }
}

impl SalienceAggregator {
    #[must_use]
    pub fn new(min_count: usize, top_n: usize) -> Self {
        Self { min_count, top_n }
    }

    /// Count non-overlapping occurrences of each term over all titles.
    ///
    /// Occurrences are counted per title and summed, so no match can span
    /// two titles. Ties keep the curated list order.
    #[must_use]
    pub fn aggregate<'a, I>(&self, terms: &TermList, titles: I) -> SalienceReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let titles: Vec<&str> = titles.into_iter().collect();
        let mut entries: Vec<SalienceEntry> = terms
            .iter()
            .map(|term| SalienceEntry {
                term: term.to_string(),
                count: titles.iter().map(|t| t.matches(term).count()).sum(),
            })
            .filter(|e| e.count >= self.min_count)
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(self.top_n);

        let max_count = entries.first().map_or(0, |e| e.count);
        SalienceReport { entries, max_count }
    }
}
