//! Mock [`FeedFetcher`] for testing runs without the network.
//!
//! [`ScriptedFetcher`] answers each source id from a fixed script. Sources
//! with no script fail with a 404 status, which keeps typos in tests loud.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::RawItem;
use crate::error::FetchError;
use crate::infrastructure::config::source::SourceConfig;
use crate::port::FeedFetcher;

/// Scripted answer for one source.
#[derive(Debug, Clone)]
pub enum Response {
    /// Deliver these items.
    Items(Vec<RawItem>),
    /// Fail with an HTTP status.
    Status(u16),
    /// Fail as if the body was not a feed.
    Unparseable,
}

#[derive(Debug, Clone)]
struct Script {
    response: Response,
    delay: Duration,
}

/// A fetcher with canned per-source responses and optional latency.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    scripts: HashMap<String, Script>,
    calls: Arc<AtomicU32>,
    order: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `source_id` with `items`.
    pub fn with_items(self, source_id: &str, items: Vec<RawItem>) -> Self {
        self.with_response(source_id, Response::Items(items), Duration::ZERO)
    }

    /// Answer `source_id` with `items` after `delay`.
    pub fn with_delayed_items(self, source_id: &str, items: Vec<RawItem>, delay: Duration) -> Self {
        self.with_response(source_id, Response::Items(items), delay)
    }

    /// Fail `source_id` with an HTTP status.
    pub fn with_status(self, source_id: &str, status: u16) -> Self {
        self.with_response(source_id, Response::Status(status), Duration::ZERO)
    }

    pub fn with_response(mut self, source_id: &str, response: Response, delay: Duration) -> Self {
        self.scripts
            .insert(source_id.to_string(), Script { response, delay });
        self
    }

    /// Total `fetch` calls so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Source ids in the order their fetches completed.
    pub fn completion_order(&self) -> Vec<String> {
        self.order.lock().clone()
    }

    fn record(&self, source_id: &str) {
        self.order.lock().push(source_id.to_string());
    }
}

#[async_trait]
impl FeedFetcher for ScriptedFetcher {
    async fn fetch(&self, source: &SourceConfig) -> Result<Vec<RawItem>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(script) = self.scripts.get(&source.id) else {
            self.record(&source.id);
            return Err(FetchError::Status {
                status: 404,
                url: source.url.clone(),
            });
        };

        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        self.record(&source.id);

        match &script.response {
            Response::Items(items) => Ok(items
                .iter()
                .cloned()
                .map(|mut item| {
                    item.source_id.clone_from(&source.id);
                    item
                })
                .collect()),
            Response::Status(status) => Err(FetchError::Status {
                status: *status,
                url: source.url.clone(),
            }),
            Response::Unparseable => {
                feed_rs::parser::parse(&b"not a feed"[..])?;
                Ok(Vec::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
