//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`fetcher`] - [`ScriptedFetcher`](fetcher::ScriptedFetcher), a canned
//!   [`FeedFetcher`](crate::port::FeedFetcher) with optional latency.
//! - [`domain`] - Builders for raw items, a fixed clock and default engines.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod fetcher;
