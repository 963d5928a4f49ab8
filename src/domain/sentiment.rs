//! Weighted keyword scoring with a two-character negation window.
//!
//! Every weight class is scanned independently and completely. Each term
//! that occurs in the title contributes once, evaluated at its first
//! occurrence. For the four non-weak classes the two characters right
//! before that occurrence are checked for any negation term; a hit swaps
//! the term's contribution for its negated value. The sum is rounded to
//! one decimal place (ties to even).

use rust_decimal::Decimal;
use serde::Serialize;

use super::term::{TermList, TermTable, WeightClass};

/// Number of characters inspected before a matched term.
pub const NEGATION_WINDOW: usize = 2;

/// A single scored keyword match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermHit {
    pub term: String,
    pub class: WeightClass,
    pub negated: bool,
    pub contribution: Decimal,
}

/// Every contribution behind a score, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub hits: Vec<TermHit>,
    pub score: Decimal,
}

/// Score a normalized title.
#[must_use]
pub fn score(title: &str, terms: &TermTable) -> Decimal {
    breakdown(title, terms).score
}

/// Score a normalized title, keeping each contributing match.
#[must_use]
pub fn breakdown(title: &str, terms: &TermTable) -> ScoreBreakdown {
    let mut hits = Vec::new();
    let mut total = Decimal::ZERO;

    for class in WeightClass::ALL {
        for term in terms.class(class).iter() {
            let Some(index) = title.find(term) else {
                continue;
            };
            let negated = class.checks_negation() && is_negated(title, index, terms.negation());
            let contribution = if negated {
                class.negated_contribution()
            } else {
                class.contribution()
            };
            total += contribution;
            hits.push(TermHit {
                term: term.to_string(),
                class,
                negated,
                contribution,
            });
        }
    }

    let mut score = total.round_dp(1);
    if score.is_zero() {
        score = Decimal::ZERO;
    }
    ScoreBreakdown { hits, score }
}

/// The (up to) two characters immediately before byte offset `index`.
#[must_use]
pub fn negation_window(title: &str, index: usize) -> &str {
    let prefix = &title[..index];
    let start = prefix
        .char_indices()
        .rev()
        .take(NEGATION_WINDOW)
        .last()
        .map_or(index, |(i, _)| i);
    &prefix[start..]
}

fn is_negated(title: &str, index: usize, negations: &TermList) -> bool {
    if index == 0 {
        return false;
    }
    negations.matches(negation_window(title, index))
}
