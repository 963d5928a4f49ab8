//! Overall market reading from the net headline score.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::item::ScoredItem;

/// Net score must exceed this to read bullish.
pub const DEFAULT_BULLISH_ABOVE: Decimal = dec!(0.5);
/// Net score must fall below this to read bearish.
pub const DEFAULT_BEARISH_BELOW: Decimal = dec!(-0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketMood {
    Bullish,
    Bearish,
    Neutral,
}

impl MarketMood {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MarketMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict bounds around the neutral band. Both edges read neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodThresholds {
    pub bullish_above: Decimal,
    pub bearish_below: Decimal,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            bullish_above: DEFAULT_BULLISH_ABOVE,
            bearish_below: DEFAULT_BEARISH_BELOW,
        }
    }
}

impl MoodThresholds {
    #[must_use]
    pub fn new(bullish_above: Decimal, bearish_below: Decimal) -> Self {
        Self {
            bullish_above,
            bearish_below,
        }
    }

    #[must_use]
    pub fn assess(&self, net_score: Decimal) -> MarketMood {
        if net_score > self.bullish_above {
            MarketMood::Bullish
        } else if net_score < self.bearish_below {
            MarketMood::Bearish
        } else {
            MarketMood::Neutral
        }
    }
}

/// Sum of every bucketed item's score.
#[must_use]
pub fn net_score<'a>(items: impl IntoIterator<Item = &'a ScoredItem>) -> Decimal {
    items.into_iter().map(|item| item.score).sum()
}
