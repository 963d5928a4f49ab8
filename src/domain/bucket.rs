//! Sign x category partitioning and strength ordering.

use serde::Serialize;

use super::item::{Category, ScoredItem};

/// The four ranked output buckets.
///
/// Bullish buckets are ordered strongest positive first, bearish buckets
/// most negative first. Equal scores keep arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Buckets {
    pub bullish_market: Vec<ScoredItem>,
    pub bullish_instrument: Vec<ScoredItem>,
    pub bearish_market: Vec<ScoredItem>,
    pub bearish_instrument: Vec<ScoredItem>,
}

impl Buckets {
    /// Partition and sort a scored corpus given in arrival order.
    ///
    /// Zero-score items are discarded.
    #[must_use]
    pub fn rank(items: impl IntoIterator<Item = ScoredItem>) -> Self {
        let mut buckets = Self::default();
        for item in items {
            let target = match (item.is_bullish(), item.is_bearish(), item.category) {
                (true, _, Category::Market) => &mut buckets.bullish_market,
                (true, _, Category::Instrument) => &mut buckets.bullish_instrument,
                (_, true, Category::Market) => &mut buckets.bearish_market,
                (_, true, Category::Instrument) => &mut buckets.bearish_instrument,
                _ => continue,
            };
            target.push(item);
        }

        // `sort_by` is stable, so ties keep first-seen order.
        buckets.bullish_market.sort_by(|a, b| b.score.cmp(&a.score));
        buckets.bullish_instrument.sort_by(|a, b| b.score.cmp(&a.score));
        buckets.bearish_market.sort_by(|a, b| a.score.cmp(&b.score));
        buckets.bearish_instrument.sort_by(|a, b| a.score.cmp(&b.score));
        buckets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bullish_market.len()
            + self.bullish_instrument.len()
            + self.bearish_market.len()
            + self.bearish_instrument.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every bucketed item, bullish before bearish, market before instrument.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredItem> {
        self.bullish_market
            .iter()
            .chain(&self.bullish_instrument)
            .chain(&self.bearish_market)
            .chain(&self.bearish_instrument)
    }
}
