//! Outbound adapters (driven side).

pub mod feed;
