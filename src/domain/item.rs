//! Headline items as they move through the pipeline.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A headline exactly as the feed collaborator delivered it.
///
/// One per feed entry. Never mutated after construction; normalization
/// produces a separate [`NormalizedTitle`](super::NormalizedTitle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
    pub source_id: String,
}

impl RawItem {
    /// Create an item without a publish timestamp.
    pub fn new(
        source_id: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published_at: None,
            source_id: source_id.into(),
        }
    }

    /// Attach a publish timestamp.
    #[must_use]
    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    /// An item without a usable title or link cannot be processed.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.title.trim().is_empty() || self.link.trim().is_empty()
    }

    /// Whether the item falls outside the recency window.
    ///
    /// Items without a timestamp are never stale.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        match self.published_at {
            Some(at) => now - at > max_age,
            None => false,
        }
    }
}

/// Whether a headline concerns a named company or the broad market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Market,
    Instrument,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Instrument => write!(f, "instrument"),
        }
    }
}

/// A relevant, non-zero headline with its signed score and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredItem {
    pub title: String,
    pub link: String,
    pub source: String,
    pub score: Decimal,
    pub category: Category,
}

impl ScoredItem {
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.score.is_sign_positive() && !self.score.is_zero()
    }

    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.score.is_sign_negative() && !self.score.is_zero()
    }
}
