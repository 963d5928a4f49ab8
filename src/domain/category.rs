//! Instrument vs. market classification.

use super::item::Category;
use super::term::TermTable;

/// Classify a scored title.
///
/// Any instrument term wins outright. Otherwise a macro term makes it
/// market news. Titles matching neither default to [`Category::Instrument`].
#[must_use]
pub fn categorize(title: &str, terms: &TermTable) -> Category {
    if terms.instrument().matches(title) {
        return Category::Instrument;
    }
    if terms.macro_terms().matches(title) {
        return Category::Market;
    }
    Category::Instrument
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TermTable {
        TermTable::builder()
            .instrument(["台積電", "鴻海"])
            .macro_terms(["大盤", "央行"])
            .build()
    }

    #[test]
    fn instrument_term_classifies_instrument() {
        assert_eq!(categorize("台積電大漲創高", &table()), Category::Instrument);
    }

    #[test]
    fn macro_term_classifies_market() {
        assert_eq!(categorize("大盤跌停", &table()), Category::Market);
    }

    #[test]
    fn instrument_beats_macro() {
        assert_eq!(
            categorize("鴻海逆勢上漲 大盤走低", &table()),
            Category::Instrument
        );
    }

    #[test]
    fn unclassified_defaults_to_instrument() {
        assert_eq!(categorize("外資買超", &table()), Category::Instrument);
        assert_eq!(categorize("", &table()), Category::Instrument);
    }
}
