//! Classification pipeline settings.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::mood::{DEFAULT_BEARISH_BELOW, DEFAULT_BULLISH_ABOVE};
use crate::domain::normalize::DEFAULT_SUFFIX_PATTERNS;
use crate::domain::salience::{DEFAULT_MIN_COUNT, DEFAULT_TOP_N};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Drop dated items older than this many hours. Undated items are kept.
    pub max_age_hours: Option<u64>,
    /// Salience terms seen fewer times are discarded.
    pub salience_min_count: usize,
    /// Number of salience terms kept.
    pub salience_top_n: usize,
    /// Net score above which the run reads bullish.
    pub mood_bullish_above: Decimal,
    /// Net score below which the run reads bearish.
    pub mood_bearish_below: Decimal,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_age_hours: None,
            salience_min_count: DEFAULT_MIN_COUNT,
            salience_top_n: DEFAULT_TOP_N,
            mood_bullish_above: DEFAULT_BULLISH_ABOVE,
            mood_bearish_below: DEFAULT_BEARISH_BELOW,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Regexes removed from the end of raw titles, applied in order.
    pub suffix_patterns: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            suffix_patterns: DEFAULT_SUFFIX_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }
}
