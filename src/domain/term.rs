//! Keyword tables driving relevance, scoring, categorization and salience.
//!
//! A [`TermTable`] is built once at startup (from configuration or the
//! built-in vocabulary) and shared read-only by every stage of the engine.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One of the six scoring tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    BullStrong,
    BullNormal,
    BullWeak,
    BearStrong,
    BearNormal,
    BearWeak,
}

impl WeightClass {
    /// All classes in evaluation order.
    pub const ALL: [WeightClass; 6] = [
        Self::BullStrong,
        Self::BullNormal,
        Self::BullWeak,
        Self::BearStrong,
        Self::BearNormal,
        Self::BearWeak,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BullStrong => "bull_strong",
            Self::BullNormal => "bull_normal",
            Self::BullWeak => "bull_weak",
            Self::BearStrong => "bear_strong",
            Self::BearNormal => "bear_normal",
            Self::BearWeak => "bear_weak",
        }
    }

    /// Contribution of a matched, non-negated term.
    #[must_use]
    pub fn contribution(self) -> Decimal {
        match self {
            Self::BullStrong => dec!(2.5),
            Self::BullNormal => dec!(1.0),
            Self::BullWeak => dec!(0.5),
            Self::BearStrong => dec!(-2.5),
            Self::BearNormal => dec!(-1.2),
            Self::BearWeak => dec!(-0.5),
        }
    }

    /// Contribution of a matched term preceded by a negation.
    ///
    /// The weak tiers are never negation-checked, so this equals
    /// [`contribution`](Self::contribution) for them.
    #[must_use]
    pub fn negated_contribution(self) -> Decimal {
        match self {
            Self::BullStrong => -(dec!(2.5) * dec!(0.5)),
            Self::BullNormal => dec!(-0.5),
            Self::BearStrong => dec!(2.5) * dec!(0.8),
            Self::BearNormal => dec!(0.5),
            Self::BullWeak | Self::BearWeak => self.contribution(),
        }
    }

    /// Whether matches in this class go through the negation window.
    #[must_use]
    pub const fn checks_negation(self) -> bool {
        !matches!(self, Self::BullWeak | Self::BearWeak)
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered set of literal terms.
///
/// Insertion order is preserved and repeated terms are dropped, first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermList {
    terms: Vec<String>,
}

impl TermList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for term in terms {
            list.push(term.into());
        }
        list
    }

    fn push(&mut self, term: String) {
        if !self.terms.contains(&term) {
            self.terms.push(term);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// First term (in list order) occurring as a substring of `text`.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.iter().find(|term| text.contains(term))
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

impl<S: Into<String>> FromIterator<S> for TermList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Immutable keyword configuration for the whole engine.
#[derive(Debug, Clone)]
pub struct TermTable {
    bull_strong: TermList,
    bull_normal: TermList,
    bull_weak: TermList,
    bear_strong: TermList,
    bear_normal: TermList,
    bear_weak: TermList,
    negation: TermList,
    whitelist: TermList,
    blacklist: TermList,
    instrument: TermList,
    macro_terms: TermList,
    events: TermList,
}

impl TermTable {
    /// Start from an empty table.
    #[must_use]
    pub fn builder() -> TermTableBuilder {
        TermTableBuilder::default()
    }

    #[must_use]
    pub fn class(&self, class: WeightClass) -> &TermList {
        match class {
            WeightClass::BullStrong => &self.bull_strong,
            WeightClass::BullNormal => &self.bull_normal,
            WeightClass::BullWeak => &self.bull_weak,
            WeightClass::BearStrong => &self.bear_strong,
            WeightClass::BearNormal => &self.bear_normal,
            WeightClass::BearWeak => &self.bear_weak,
        }
    }

    #[must_use]
    pub fn negation(&self) -> &TermList {
        &self.negation
    }

    #[must_use]
    pub fn whitelist(&self) -> &TermList {
        &self.whitelist
    }

    #[must_use]
    pub fn blacklist(&self) -> &TermList {
        &self.blacklist
    }

    #[must_use]
    pub fn instrument(&self) -> &TermList {
        &self.instrument
    }

    #[must_use]
    pub fn macro_terms(&self) -> &TermList {
        &self.macro_terms
    }

    #[must_use]
    pub fn events(&self) -> &TermList {
        &self.events
    }

    /// Curated salience vocabulary: instrument, macro, then event terms.
    #[must_use]
    pub fn salience_terms(&self) -> TermList {
        self.instrument
            .iter()
            .chain(self.macro_terms.iter())
            .chain(self.events.iter())
            .collect()
    }
}

impl Default for TermTable {
    /// The built-in Taiwan equities vocabulary.
    fn default() -> Self {
        TermTableBuilder::builtin().build()
    }
}

/// Builder for [`TermTable`]. Lists that are never set stay empty.
#[derive(Debug, Clone)]
pub struct TermTableBuilder {
    table: TermTable,
}

impl Default for TermTableBuilder {
    fn default() -> Self {
        Self {
            table: TermTable {
                bull_strong: TermList::default(),
                bull_normal: TermList::default(),
                bull_weak: TermList::default(),
                bear_strong: TermList::default(),
                bear_normal: TermList::default(),
                bear_weak: TermList::default(),
                negation: TermList::default(),
                whitelist: TermList::default(),
                blacklist: TermList::default(),
                instrument: TermList::default(),
                macro_terms: TermList::default(),
                events: TermList::default(),
            },
        }
    }
}

impl TermTableBuilder {
    /// A builder pre-populated with the built-in vocabulary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
            .class(WeightClass::BullStrong, builtin::BULL_STRONG.iter().copied())
            .class(WeightClass::BullNormal, builtin::BULL_NORMAL.iter().copied())
            .class(WeightClass::BullWeak, builtin::BULL_WEAK.iter().copied())
            .class(WeightClass::BearStrong, builtin::BEAR_STRONG.iter().copied())
            .class(WeightClass::BearNormal, builtin::BEAR_NORMAL.iter().copied())
            .class(WeightClass::BearWeak, builtin::BEAR_WEAK.iter().copied())
            .negation(builtin::NEGATION.iter().copied())
            .whitelist(builtin::WHITELIST.iter().copied())
            .blacklist(builtin::BLACKLIST.iter().copied())
            .instrument(builtin::INSTRUMENT.iter().copied())
            .macro_terms(builtin::MACRO.iter().copied())
            .events(builtin::EVENTS.iter().copied())
    }

    #[must_use]
    pub fn class<I, S>(mut self, class: WeightClass, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = TermList::new(terms);
        let table = &mut self.table;
        match class {
            WeightClass::BullStrong => table.bull_strong = list,
            WeightClass::BullNormal => table.bull_normal = list,
            WeightClass::BullWeak => table.bull_weak = list,
            WeightClass::BearStrong => table.bear_strong = list,
            WeightClass::BearNormal => table.bear_normal = list,
            WeightClass::BearWeak => table.bear_weak = list,
        }
        self
    }

    #[must_use]
    pub fn negation<I: IntoIterator<Item = S>, S: Into<String>>(mut self, terms: I) -> Self {
        self.table.negation = TermList::new(terms);
        self
    }

    #[must_use]
    pub fn whitelist<I: IntoIterator<Item = S>, S: Into<String>>(mut self, terms: I) -> Self {
        self.table.whitelist = TermList::new(terms);
        self
    }

    #[must_use]
    pub fn blacklist<I: IntoIterator<Item = S>, S: Into<String>>(mut self, terms: I) -> Self {
        self.table.blacklist = TermList::new(terms);
        self
    }

    #[must_use]
    pub fn instrument<I: IntoIterator<Item = S>, S: Into<String>>(mut self, terms: I) -> Self {
        self.table.instrument = TermList::new(terms);
        self
    }

    #[must_use]
    pub fn macro_terms<I: IntoIterator<Item = S>, S: Into<String>>(mut self, terms: I) -> Self {
        self.table.macro_terms = TermList::new(terms);
        self
    }

    #[must_use]
    pub fn events<I: IntoIterator<Item = S>, S: Into<String>>(mut self, terms: I) -> Self {
        self.table.events = TermList::new(terms);
        self
    }

    #[must_use]
    pub fn build(self) -> TermTable {
        self.table
    }
}

/// Built-in Taiwan equities vocabulary.
///
/// Terms within and across the scoring tiers avoid containing one another
/// so that a single phrase is not counted in two tiers.
pub mod builtin {
    pub const BULL_STRONG: &[&str] = &["大漲", "漲停", "創高", "飆漲", "噴出", "暴漲", "強攻"];
    pub const BULL_NORMAL: &[&str] = &[
        "上漲", "走高", "收紅", "看好", "成長", "獲利", "買超", "反彈", "調升", "利多",
    ];
    pub const BULL_WEAK: &[&str] = &["小漲", "持穩", "回溫", "樂觀", "擴產", "加碼"];
    pub const BEAR_STRONG: &[&str] = &["大跌", "跌停", "重挫", "崩盤", "暴跌", "破底", "慘跌"];
    pub const BEAR_NORMAL: &[&str] = &[
        "下跌", "走低", "收黑", "衰退", "虧損", "賣超", "下修", "看壞", "利空",
    ];
    pub const BEAR_WEAK: &[&str] = &["小跌", "疲弱", "保守", "觀望", "壓力", "減碼"];
    pub const NEGATION: &[&str] = &["不", "未", "沒", "無", "非", "免"];
    pub const WHITELIST: &[&str] = &[
        "台股", "大盤", "加權", "指數", "股市", "股價", "台積電", "聯發科", "鴻海", "廣達",
        "大立光", "台達電", "聯電", "日月光", "長榮", "外資", "投信", "半導體", "央行", "利率",
        "通膨", "升息", "降息", "美股", "道瓊", "那斯達克", "營收", "財報", "ETF", "Fed",
    ];
    pub const BLACKLIST: &[&str] = &[
        "徵才", "招募", "求職", "職缺", "塞車", "路況", "交通管制", "抽獎", "星座", "運勢",
    ];
    pub const INSTRUMENT: &[&str] = &[
        "台積電", "聯發科", "鴻海", "廣達", "大立光", "台達電", "聯電", "日月光", "長榮", "華碩",
        "緯創", "ETF",
    ];
    pub const MACRO: &[&str] = &[
        "大盤", "加權", "指數", "股市", "台股", "央行", "利率", "通膨", "升息", "降息", "美股",
        "道瓊", "那斯達克", "Fed", "外資", "GDP", "CPI", "匯率",
    ];
    pub const EVENTS: &[&str] = &["AI", "輝達", "關稅", "法說會", "除息", "併購", "川普", "地震"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_list_keeps_first_occurrence_order() {
        let list = TermList::new(["b", "a", "b", "c", "a"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn first_match_follows_list_order() {
        let list = TermList::new(["漲停", "大漲"]);
        assert_eq!(list.first_match("大漲後漲停"), Some("漲停"));
        assert_eq!(list.first_match("持平"), None);
        assert!(!TermList::default().matches("anything"));
    }

    #[test]
    fn negated_contributions_follow_tier_table() {
        assert_eq!(WeightClass::BullStrong.negated_contribution(), dec!(-1.25));
        assert_eq!(WeightClass::BullNormal.negated_contribution(), dec!(-0.5));
        assert_eq!(WeightClass::BearStrong.negated_contribution(), dec!(2.0));
        assert_eq!(WeightClass::BearNormal.negated_contribution(), dec!(0.5));
        assert_eq!(WeightClass::BullWeak.negated_contribution(), dec!(0.5));
        assert_eq!(WeightClass::BearWeak.negated_contribution(), dec!(-0.5));
    }

    #[test]
    fn only_weak_tiers_skip_negation() {
        let skipped: Vec<_> = WeightClass::ALL
            .into_iter()
            .filter(|c| !c.checks_negation())
            .collect();
        assert_eq!(skipped, vec![WeightClass::BullWeak, WeightClass::BearWeak]);
    }

    #[test]
    fn salience_terms_merge_without_repeats() {
        let table = TermTable::builder()
            .instrument(["台積電", "ETF"])
            .macro_terms(["大盤", "ETF"])
            .events(["AI"])
            .build();
        let terms: Vec<_> = table.salience_terms().iter().map(str::to_owned).collect();
        assert_eq!(terms, vec!["台積電", "ETF", "大盤", "AI"]);
    }

    #[test]
    fn builtin_scoring_tiers_do_not_nest() {
        let table = TermTable::default();
        let all: Vec<&str> = WeightClass::ALL
            .into_iter()
            .flat_map(|c| table.class(c).iter())
            .collect();
        for a in &all {
            for b in &all {
                if a != b {
                    assert!(!a.contains(b), "{a} contains {b}");
                }
            }
        }
    }
}
