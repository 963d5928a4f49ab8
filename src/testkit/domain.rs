//! Builders for domain primitives used across tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::application::{Classifier, Pipeline};
use crate::domain::{RawItem, SalienceAggregator, TermTable, TitleNormalizer};

/// A raw item with a link derived from the title.
pub fn item(source: &str, title: &str) -> RawItem {
    let slug: String = title
        .chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| format!("{:x}", c as u32))
        .collect();
    RawItem::new(source, title, format!("https://{source}.example.com/{slug}"))
}

/// A raw item with an explicit link.
pub fn item_at(source: &str, title: &str, link: &str) -> RawItem {
    RawItem::new(source, title, link)
}

/// Fixed clock for deterministic recency tests: 2026-10-16 08:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Classifier over the built-in vocabulary and suffix patterns.
pub fn classifier() -> Classifier {
    Classifier::new(
        Arc::new(TermTable::default()),
        Arc::new(TitleNormalizer::default()),
    )
}

/// Pipeline over the built-in vocabulary with default salience limits.
pub fn pipeline() -> Pipeline {
    Pipeline::new(classifier(), SalienceAggregator::default())
}
