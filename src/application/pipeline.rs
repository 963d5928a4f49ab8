//! Batch processing: fetched items in, ranked report out.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::classifier::{Classifier, Outcome};
use super::report::Report;
use crate::domain::{
    mood, Buckets, Deduplicator, MoodThresholds, RawItem, RunSummary, SalienceAggregator,
    ScoredItem, SourceFailure,
};
use crate::error::FetchError;

/// Items (or the failure) from one source.
#[derive(Debug)]
pub struct SourceBatch {
    pub source_id: String,
    pub result: Result<Vec<RawItem>, FetchError>,
}

impl SourceBatch {
    pub fn ok(source_id: impl Into<String>, items: Vec<RawItem>) -> Self {
        Self {
            source_id: source_id.into(),
            result: Ok(items),
        }
    }

    pub fn failed(source_id: impl Into<String>, error: FetchError) -> Self {
        Self {
            source_id: source_id.into(),
            result: Err(error),
        }
    }
}

/// Sequential classification of every batch, in the order given.
///
/// Dedup state lives only for the duration of one [`Pipeline::process`]
/// call, so the first occurrence of a link or headline in batch order wins.
#[derive(Debug, Clone)]
pub struct Pipeline {
    classifier: Classifier,
    salience: SalienceAggregator,
    mood: MoodThresholds,
}

impl Pipeline {
    #[must_use]
    pub fn new(classifier: Classifier, salience: SalienceAggregator) -> Self {
        Self {
            classifier,
            salience,
            mood: MoodThresholds::default(),
        }
    }

    /// Replace the default ±0.5 mood band.
    #[must_use]
    pub fn with_mood(mut self, mood: MoodThresholds) -> Self {
        self.mood = mood;
        self
    }

    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify, rank and summarize.
    ///
    /// Failed batches are recorded and skipped; they never abort the run.
    #[must_use]
    pub fn process(&self, batches: Vec<SourceBatch>, now: DateTime<Utc>) -> Report {
        let mut summary = RunSummary {
            sources_total: batches.len(),
            ..RunSummary::default()
        };
        let mut failures = Vec::new();
        let mut dedup = Deduplicator::new();
        let mut scored: Vec<ScoredItem> = Vec::new();

        for batch in batches {
            let items = match batch.result {
                Ok(items) => items,
                Err(error) => {
                    warn!(source = %batch.source_id, error = %error, "Source failed, skipping");
                    summary.sources_failed += 1;
                    failures.push(SourceFailure {
                        source_id: batch.source_id,
                        reason: error.to_string(),
                    });
                    continue;
                }
            };

            summary.raw_items += items.len();
            for item in &items {
                match self.classifier.classify(item, now, &mut dedup) {
                    Outcome::Scored(item) => scored.push(item),
                    Outcome::Dropped(reason) => summary.record_drop(reason),
                }
            }
        }

        summary.surviving = scored.len();
        let salience = self.salience.aggregate(
            &self.classifier.terms().salience_terms(),
            scored.iter().map(|item| item.title.as_str()),
        );
        let net_score = mood::net_score(&scored);
        let mood = self.mood.assess(net_score);
        let buckets = Buckets::rank(scored);

        info!(
            sources = summary.sources_total,
            failed = summary.sources_failed,
            raw = summary.raw_items,
            surviving = summary.surviving,
            duplicates = summary.duplicates(),
            net_score = %net_score,
            %mood,
            "Pipeline complete"
        );

        Report {
            generated_at: now,
            summary,
            net_score,
            mood,
            buckets,
            salience,
            failures,
        }
    }
}
