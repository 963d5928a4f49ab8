//! Trait definitions (hexagonal ports).
//!
//! ```text
//!   ┌──────────────┐     ┌──────────────────────────┐
//!   │ CLI (inbound)│ ──▶ │ application::NewsRun     │
//!   └──────────────┘     │   domain engine          │
//!                        └────────────┬─────────────┘
//!                                     │ FeedFetcher
//!                                     ▼
//!                           ┌───────────────────┐
//!                           │ HTTP feed adapter │
//!                           └───────────────────┘
//! ```

pub mod outbound;

pub use outbound::feed::FeedFetcher;
