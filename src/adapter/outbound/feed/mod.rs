//! Feed retrieval over HTTP.
//!
//! [`HttpFeedFetcher`] downloads a feed with bounded retries and hands the
//! body to `feed-rs`, which accepts RSS 0.9x/1.0/2.0, Atom and JSON Feed.

mod http;
mod parse;

pub use http::HttpFeedFetcher;
pub use parse::parse_feed;
