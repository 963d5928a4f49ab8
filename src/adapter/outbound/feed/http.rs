//! reqwest-backed [`FeedFetcher`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::parse::parse_feed;
use crate::domain::RawItem;
use crate::error::FetchError;
use crate::infrastructure::config::source::{FetchConfig, SourceConfig};
use crate::port::FeedFetcher;

/// Downloads feeds over HTTP(S).
///
/// Connection failures, timeouts and 5xx/429 responses are retried up to
/// `retry_max_attempts` total attempts. Other statuses fail immediately.
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    http: HttpClient,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpFeedFetcher {
    /// Build a fetcher with default client settings and a single attempt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &FetchConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    async fn get_with_retry(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err.to_string()).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let error = FetchError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                };
                if attempt >= max_attempts || !Self::should_retry_status(status) {
                    return Err(error);
                }
                self.backoff(attempt, max_attempts, &error.to_string()).await;
                continue;
            }

            match response.bytes().await {
                Ok(bytes) => return Ok(bytes.to_vec()),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err.to_string()).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    fn should_retry_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, error: &str) {
        warn!(
            attempt,
            max_attempts,
            error,
            "Feed request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, source: &SourceConfig) -> Result<Vec<RawItem>, FetchError> {
        let body = self.get_with_retry(&source.url).await?;
        let items = parse_feed(&body, &source.id)?;
        debug!(source = %source.id, bytes = body.len(), items = items.len(), "Parsed feed");
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
