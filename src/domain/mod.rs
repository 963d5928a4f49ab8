//! Pure headline classification engine.
//!
//! Stages, in pipeline order:
//!
//! - [`normalize`] - suffix/bracket cleanup and duplicate fingerprints
//! - [`dedup`] - run-scoped link and fingerprint tracking
//! - [`relevance`] - blacklist-first two-list gate
//! - [`sentiment`] - weighted keyword score with negation window
//! - [`category`] - instrument vs. market
//! - [`bucket`] - four ranked buckets
//! - [`salience`] - curated term frequency
//! - [`mood`] - net score into an overall market reading
//!
//! Every stage except [`dedup`] is a total, pure function of its input and
//! the shared [`TermTable`].

pub mod bucket;
pub mod category;
pub mod dedup;
pub mod item;
pub mod mood;
pub mod normalize;
pub mod relevance;
pub mod salience;
pub mod sentiment;
pub mod summary;
pub mod term;

pub use bucket::Buckets;
pub use category::categorize;
pub use dedup::{DedupVerdict, Deduplicator};
pub use item::{Category, RawItem, ScoredItem};
pub use mood::{MarketMood, MoodThresholds};
pub use normalize::{fingerprint, NormalizedTitle, TitleNormalizer};
pub use relevance::Relevance;
pub use salience::{SalienceAggregator, SalienceEntry, SalienceReport};
pub use sentiment::{ScoreBreakdown, TermHit};
pub use summary::{DropReason, RunSummary, SourceFailure};
pub use term::{TermList, TermTable, TermTableBuilder, WeightClass};
