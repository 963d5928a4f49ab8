//! Newspulse - headline sentiment scanner for financial news feeds.
//!
//! Pulls entries from a configured set of RSS/Atom feeds, cleans and
//! de-duplicates the headlines, gates them by topic, scores each with a
//! weighted keyword lexicon and ranks the survivors into four buckets
//! (bullish/bearish x market/instrument), plus a hot-topic frequency table.
//!
//! # Architecture
//!
//! - [`domain`] - Pure classification engine: normalize, dedup, relevance,
//!   sentiment, category, buckets, salience
//! - [`port`] - The [`FeedFetcher`](port::FeedFetcher) seam
//! - [`application`] - Classifier, batch pipeline and the concurrent run
//! - [`adapter`] - HTTP feed retrieval and the CLI
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use newspulse::application::Classifier;
//! use newspulse::domain::{TermTable, TitleNormalizer};
//!
//! let classifier = Classifier::new(
//!     Arc::new(TermTable::default()),
//!     Arc::new(TitleNormalizer::default()),
//! );
//! let diagnosis = classifier.diagnose("台積電大漲創高 - 鉅亨網");
//! assert_eq!(diagnosis.title.text, "台積電大漲創高");
//! assert_eq!(diagnosis.breakdown.score.to_string(), "5.0");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
