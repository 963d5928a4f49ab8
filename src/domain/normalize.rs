//! Headline cleanup and duplicate fingerprints.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Publisher suffixes appended to headlines by aggregators and portals,
/// e.g. `"台積電法說會 - 鉅亨網"` or `"大盤收紅｜Yahoo奇摩股市"`.
pub const DEFAULT_SUFFIX_PATTERNS: &[&str] = &[
    r"\s*[-–—|｜]\s*(?:Yahoo奇摩股市|Yahoo股市|Yahoo奇摩新聞|Yahoo新聞).*$",
    r"\s*[-–—|｜]\s*(?:鉅亨網|Anue鉅亨|鉅亨速報).*$",
    r"\s*[-–—|｜]\s*(?:經濟日報|工商時報|自由財經|自由時報|中時新聞網|聯合新聞網|中央社).*$",
    r"\s*[-–—|｜]\s*(?:MoneyDJ理財網|ETtoday財經雲|ETtoday新聞雲|商業周刊|數位時代|Google 新聞).*$",
];

fn bracketed() -> &'static Regex {
    static BRACKETED: OnceLock<Regex> = OnceLock::new();
    BRACKETED.get_or_init(|| {
        Regex::new(r"\(.*?\)|（.*?）|\[.*?\]|【.*?】|〔.*?〕").expect("bracket regex")
    })
}

/// A cleaned headline plus the key used to detect republished copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTitle {
    pub text: String,
    pub fingerprint: String,
}

impl NormalizedTitle {
    #[must_use]
    pub fn from_text(text: String) -> Self {
        let fingerprint = fingerprint(&text);
        Self { text, fingerprint }
    }
}

/// Strip every character that is not a letter, digit or underscore.
///
/// Only used for duplicate detection; never displayed.
#[must_use]
pub fn fingerprint(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Removes per-source suffix noise and bracketed asides from raw titles.
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    suffixes: Vec<Regex>,
}

impl TitleNormalizer {
    /// Compile a normalizer from suffix patterns.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn new<I, S>(suffix_patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffix_patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { suffixes })
    }

    /// Clean a raw title. Total over any input, including the empty string.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> NormalizedTitle {
        let mut text = raw.to_string();
        for suffix in &self.suffixes {
            text = suffix.replace(&text, "").into_owned();
        }
        let text = bracketed().replace_all(&text, "").trim().to_string();
        NormalizedTitle::from_text(text)
    }

    #[must_use]
    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIX_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("built-in suffix regex"))
                .collect(),
        }
    }
}
