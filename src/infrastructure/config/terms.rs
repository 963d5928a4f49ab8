//! Keyword lists from the `[terms]` section.
//!
//! Any list left out of the file falls back to the built-in vocabulary;
//! an explicitly empty list stays empty.

use serde::Deserialize;

use crate::domain::term::{builtin, TermTable, TermTableBuilder, WeightClass};
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TermsConfig {
    pub bull_strong: Option<Vec<String>>,
    pub bull_normal: Option<Vec<String>>,
    pub bull_weak: Option<Vec<String>>,
    pub bear_strong: Option<Vec<String>>,
    pub bear_normal: Option<Vec<String>>,
    pub bear_weak: Option<Vec<String>>,
    pub negation: Option<Vec<String>>,
    pub whitelist: Option<Vec<String>>,
    pub blacklist: Option<Vec<String>>,
    pub instrument: Option<Vec<String>>,
    #[serde(rename = "macro")]
    pub macro_terms: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
}

fn pick(configured: &Option<Vec<String>>, fallback: &[&str]) -> Vec<String> {
    match configured {
        Some(terms) => terms.clone(),
        None => fallback.iter().map(|t| (*t).to_string()).collect(),
    }
}

impl TermsConfig {
    fn lists(&self) -> [(&'static str, &Option<Vec<String>>); 12] {
        [
            ("bull_strong", &self.bull_strong),
            ("bull_normal", &self.bull_normal),
            ("bull_weak", &self.bull_weak),
            ("bear_strong", &self.bear_strong),
            ("bear_normal", &self.bear_normal),
            ("bear_weak", &self.bear_weak),
            ("negation", &self.negation),
            ("whitelist", &self.whitelist),
            ("blacklist", &self.blacklist),
            ("instrument", &self.instrument),
            ("macro", &self.macro_terms),
            ("events", &self.events),
        ]
    }

    /// Reject blank terms: an empty substring matches every title.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, list) in self.lists() {
            let Some(terms) = list else { continue };
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "terms must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build the immutable table used by the engine.
    #[must_use]
    pub fn to_table(&self) -> TermTable {
        TermTableBuilder::default()
            .class(
                WeightClass::BullStrong,
                pick(&self.bull_strong, builtin::BULL_STRONG),
            )
            .class(
                WeightClass::BullNormal,
                pick(&self.bull_normal, builtin::BULL_NORMAL),
            )
            .class(WeightClass::BullWeak, pick(&self.bull_weak, builtin::BULL_WEAK))
            .class(
                WeightClass::BearStrong,
                pick(&self.bear_strong, builtin::BEAR_STRONG),
            )
            .class(
                WeightClass::BearNormal,
                pick(&self.bear_normal, builtin::BEAR_NORMAL),
            )
            .class(WeightClass::BearWeak, pick(&self.bear_weak, builtin::BEAR_WEAK))
            .negation(pick(&self.negation, builtin::NEGATION))
            .whitelist(pick(&self.whitelist, builtin::WHITELIST))
            .blacklist(pick(&self.blacklist, builtin::BLACKLIST))
            .instrument(pick(&self.instrument, builtin::INSTRUMENT))
            .macro_terms(pick(&self.macro_terms, builtin::MACRO))
            .events(pick(&self.events, builtin::EVENTS))
            .build()
    }
}
