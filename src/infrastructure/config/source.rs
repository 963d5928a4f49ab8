//! Feed sources and HTTP fetch settings.

use serde::Deserialize;

/// A single feed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Unique identifier, carried on every item from this feed.
    pub id: String,
    /// Feed URL (RSS, Atom or JSON Feed).
    pub url: String,
    /// Disabled sources are skipped without counting as failures.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl SourceConfig {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            enabled: true,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// HTTP behaviour for feed retrieval.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request budget per source, retries included.
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Total attempts per source (1 = no retry).
    pub retry_max_attempts: u32,
    pub retry_backoff_ms: u64,
    /// Cap on entries kept per source; 0 keeps all.
    pub max_items_per_source: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            connect_timeout_ms: 5_000,
            retry_max_attempts: 2,
            retry_backoff_ms: 500,
            max_items_per_source: 0,
            user_agent: concat!("newspulse/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}
