//! Per-item classification: normalize, dedup, gate, score, categorize.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::{
    categorize, relevance, sentiment, Category, DedupVerdict, Deduplicator, DropReason,
    NormalizedTitle, RawItem, Relevance, ScoreBreakdown, ScoredItem, TermTable, TitleNormalizer,
};

/// What happened to one raw item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Scored(ScoredItem),
    Dropped(DropReason),
}

/// Full trace of a single title through the stateless stages.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub title: NormalizedTitle,
    pub relevance: Relevance,
    pub breakdown: ScoreBreakdown,
    /// Only set for relevant, non-zero titles.
    pub category: Option<Category>,
}

/// Runs items through the engine stages with a shared keyword table.
///
/// Cheap to clone; the table and normalizer are shared.
#[derive(Debug, Clone)]
pub struct Classifier {
    terms: Arc<TermTable>,
    normalizer: Arc<TitleNormalizer>,
    max_age: Option<Duration>,
}

impl Classifier {
    #[must_use]
    pub fn new(terms: Arc<TermTable>, normalizer: Arc<TitleNormalizer>) -> Self {
        Self {
            terms,
            normalizer,
            max_age: None,
        }
    }

    /// Drop dated items older than `max_age`.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    #[must_use]
    pub fn terms(&self) -> &TermTable {
        &self.terms
    }

    /// Classify one item, recording it in `dedup` if it is new.
    ///
    /// Order: malformed check, recency, normalize, link/fingerprint dedup,
    /// relevance, score, categorize. Dedup runs before relevance so that
    /// an irrelevant headline still claims its link and fingerprint.
    pub fn classify(
        &self,
        item: &RawItem,
        now: DateTime<Utc>,
        dedup: &mut Deduplicator,
    ) -> Outcome {
        if item.is_malformed() {
            debug!(source = %item.source_id, "Skipping malformed item");
            return Outcome::Dropped(DropReason::Malformed);
        }
        if let Some(max_age) = self.max_age {
            if item.is_stale(now, max_age) {
                debug!(source = %item.source_id, link = %item.link, "Skipping stale item");
                return Outcome::Dropped(DropReason::Stale);
            }
        }

        let title = self.normalizer.normalize(&item.title);

        match dedup.check(&item.link, &title.fingerprint) {
            DedupVerdict::Fresh => {}
            DedupVerdict::DuplicateLink => {
                debug!(link = %item.link, "Duplicate link");
                return Outcome::Dropped(DropReason::DuplicateLink);
            }
            DedupVerdict::DuplicateFingerprint => {
                debug!(title = %title.text, link = %item.link, "Duplicate headline");
                return Outcome::Dropped(DropReason::DuplicateFingerprint);
            }
        }

        match relevance::assess(&title.text, &self.terms) {
            Relevance::Relevant { .. } => {}
            Relevance::Blacklisted { term } => {
                debug!(title = %title.text, %term, "Blacklisted");
                return Outcome::Dropped(DropReason::Blacklisted);
            }
            Relevance::OffTopic => {
                debug!(title = %title.text, "Off topic");
                return Outcome::Dropped(DropReason::OffTopic);
            }
        }

        let score = sentiment::score(&title.text, &self.terms);
        if score.is_zero() {
            debug!(title = %title.text, "Zero score");
            return Outcome::Dropped(DropReason::ZeroScore);
        }

        let category = categorize(&title.text, &self.terms);
        Outcome::Scored(ScoredItem {
            title: title.text,
            link: item.link.clone(),
            source: item.source_id.clone(),
            score,
            category,
        })
    }

    /// Trace a raw title through normalize, relevance, score and category.
    ///
    /// No dedup state is involved. Scoring is reported even for titles the
    /// gate rejects; `category` is only set when the item would be bucketed.
    #[must_use]
    pub fn diagnose(&self, raw_title: &str) -> Diagnosis {
        let title = self.normalizer.normalize(raw_title);
        let relevance = relevance::assess(&title.text, &self.terms);
        let breakdown = sentiment::breakdown(&title.text, &self.terms);
        let category = (relevance.is_relevant() && !breakdown.score.is_zero())
            .then(|| categorize(&title.text, &self.terms));
        Diagnosis {
            title,
            relevance,
            breakdown,
            category,
        }
    }
}
