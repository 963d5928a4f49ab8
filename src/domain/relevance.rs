//! Two-list topical gate.

use serde::Serialize;

use super::term::TermTable;

/// Outcome of the relevance gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Relevance {
    /// At least one whitelist term matched and no blacklist term did.
    Relevant { topic: String },
    /// A blacklist term matched. Overrides any whitelist match.
    Blacklisted { term: String },
    /// Nothing on either list matched.
    OffTopic,
}

impl Relevance {
    #[must_use]
    pub fn is_relevant(&self) -> bool {
        matches!(self, Self::Relevant { .. })
    }
}

/// Case-sensitive substring test against the blacklist, then the whitelist.
#[must_use]
pub fn assess(title: &str, terms: &TermTable) -> Relevance {
    if let Some(term) = terms.blacklist().first_match(title) {
        return Relevance::Blacklisted {
            term: term.to_string(),
        };
    }
    match terms.whitelist().first_match(title) {
        Some(topic) => Relevance::Relevant {
            topic: topic.to_string(),
        },
        None => Relevance::OffTopic,
    }
}
