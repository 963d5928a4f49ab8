//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Turns a validated [`Config`] into the engine objects the CLI drives.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::feed::HttpFeedFetcher;
use crate::application::{Classifier, NewsRun, Pipeline};
use crate::domain::{MoodThresholds, SalienceAggregator};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::FeedFetcher;

/// Build the per-item classifier from the term and normalizer sections.
///
/// # Errors
///
/// Returns a config error if a suffix pattern fails to compile.
#[allow(clippy::result_large_err)]
pub fn build_classifier(config: &Config) -> Result<Classifier> {
    let terms = Arc::new(config.term_table());
    let normalizer = Arc::new(config.title_normalizer()?);
    let mut classifier = Classifier::new(terms, normalizer);
    if let Some(hours) = config.pipeline.max_age_hours {
        // Clamp to the largest window chrono can represent.
        let hours = i64::try_from(hours)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 3_600_000);
        classifier = classifier.with_max_age(chrono::Duration::hours(hours));
    }
    Ok(classifier)
}

/// Build the batch pipeline.
///
/// # Errors
///
/// See [`build_classifier`].
#[allow(clippy::result_large_err)]
pub fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let salience = SalienceAggregator::new(
        config.pipeline.salience_min_count,
        config.pipeline.salience_top_n,
    );
    let mood = MoodThresholds::new(
        config.pipeline.mood_bullish_above,
        config.pipeline.mood_bearish_below,
    );
    Ok(Pipeline::new(build_classifier(config)?, salience).with_mood(mood))
}

/// Wire a run over the enabled sources with the given fetcher.
///
/// # Errors
///
/// See [`build_classifier`].
#[allow(clippy::result_large_err)]
pub fn build_run_with(config: &Config, fetcher: Arc<dyn FeedFetcher>) -> Result<NewsRun> {
    let sources: Vec<_> = config.enabled_sources().cloned().collect();
    let skipped = config.sources.len() - sources.len();
    info!(
        enabled = sources.len(),
        disabled = skipped,
        fetcher = fetcher.name(),
        "Sources configured"
    );

    Ok(NewsRun::new(fetcher, sources, build_pipeline(config)?)
        .with_timeout(Duration::from_millis(config.fetch.timeout_ms))
        .with_max_items_per_source(config.fetch.max_items_per_source))
}

/// Wire a run that fetches over HTTP.
///
/// # Errors
///
/// See [`build_classifier`].
#[allow(clippy::result_large_err)]
pub fn build_run(config: &Config) -> Result<NewsRun> {
    let fetcher: Arc<dyn FeedFetcher> = Arc::new(HttpFeedFetcher::from_config(&config.fetch));
    build_run_with(config, fetcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[[sources]]
id = "a"
url = "https://a.example.com/rss"

[[sources]]
id = "b"
url = "https://b.example.com/rss"
enabled = false

[fetch]
max_items_per_source = 5
"#;

    #[test]
    fn build_run_skips_disabled_sources() {
        let config = Config::parse_toml(CONFIG).unwrap();
        let run = build_run(&config).unwrap();
        assert_eq!(run.sources().len(), 1);
        assert_eq!(run.sources()[0].id, "a");
    }

    #[test]
    fn build_classifier_applies_recency_window() {
        let config = Config::parse_toml(&format!("{CONFIG}\n[pipeline]\nmax_age_hours = 6\n"))
            .unwrap();
        let classifier = build_classifier(&config).unwrap();
        let now = chrono::Utc::now();
        let old = crate::domain::RawItem::new("a", "台股大漲", "https://a/1")
            .published(now - chrono::Duration::hours(7));
        let mut dedup = crate::domain::Deduplicator::new();
        assert_eq!(
            classifier.classify(&old, now, &mut dedup),
            crate::application::Outcome::Dropped(crate::domain::DropReason::Stale)
        );
    }
}
