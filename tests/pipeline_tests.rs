//! End-to-end engine behaviour over the built-in vocabulary.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use newspulse::application::SourceBatch;
use newspulse::domain::{Category, ScoredItem};
use newspulse::error::FetchError;
use newspulse::testkit::domain::{classifier, item, item_at, now, pipeline};

fn scores(items: &[ScoredItem]) -> Vec<Decimal> {
    items.iter().map(|i| i.score).collect()
}

fn titles(items: &[ScoredItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

#[test]
fn strong_bullish_instrument_headline() {
    let report = pipeline().process(
        vec![SourceBatch::ok("s", vec![item("s", "台積電大漲創高")])],
        now(),
    );
    let bucket = &report.buckets.bullish_instrument;
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].score, dec!(5.0));
    assert_eq!(bucket[0].category, Category::Instrument);
    assert_eq!(report.buckets.len(), 1);
}

#[test]
fn strong_bearish_market_headline() {
    let report = pipeline().process(
        vec![SourceBatch::ok("s", vec![item("s", "大盤跌停")])],
        now(),
    );
    let bucket = &report.buckets.bearish_market;
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].score, dec!(-2.5));
    assert_eq!(bucket[0].category, Category::Market);
}

#[test]
fn same_headline_with_different_links_survives_once() {
    let batches = vec![
        SourceBatch::ok(
            "a",
            vec![item_at("a", "台積電大漲創高 - 鉅亨網", "https://a.example.com/L1")],
        ),
        SourceBatch::ok(
            "b",
            vec![item_at("b", "台積電大漲創高（更新）", "https://b.example.com/L2")],
        ),
    ];
    let report = pipeline().process(batches, now());
    assert_eq!(report.buckets.len(), 1);
    assert_eq!(report.buckets.bullish_instrument[0].source, "a");
    assert_eq!(report.summary.duplicate_fingerprints, 1);
}

#[test]
fn same_link_twice_survives_once() {
    let items = vec![
        item_at("s", "台股大漲", "https://s.example.com/1"),
        item_at("s", "外資買超台股", "https://s.example.com/1"),
    ];
    let report = pipeline().process(vec![SourceBatch::ok("s", items)], now());
    assert_eq!(titles(&report.buckets.bullish_market), vec!["台股大漲"]);
    assert_eq!(report.summary.duplicate_links, 1);
}

#[test]
fn blacklist_overrides_whitelist() {
    let report = pipeline().process(
        vec![SourceBatch::ok("s", vec![item("s", "台積電大漲 擴大徵才")])],
        now(),
    );
    assert!(report.buckets.is_empty());
    assert_eq!(report.summary.blacklisted, 1);
}

#[test]
fn offsetting_terms_are_excluded() {
    let report = pipeline().process(
        vec![SourceBatch::ok("s", vec![item("s", "台股持穩但觀望")])],
        now(),
    );
    assert!(report.buckets.is_empty());
    assert_eq!(report.summary.zero_score, 1);
}

#[test]
fn negated_bearish_term_nets_positive() {
    let report = pipeline().process(
        vec![SourceBatch::ok("s", vec![item("s", "台股不再崩盤")])],
        now(),
    );
    assert_eq!(scores(&report.buckets.bullish_market), vec![dec!(2.0)]);
}

#[test]
fn negated_bullish_term_rounds_half_to_even() {
    let diagnosis = classifier().diagnose("台股未大漲");
    assert_eq!(diagnosis.breakdown.hits.len(), 1);
    assert!(diagnosis.breakdown.hits[0].negated);
    assert_eq!(diagnosis.breakdown.score, dec!(-1.2));
}

#[test]
fn weak_terms_ignore_negation() {
    let diagnosis = classifier().diagnose("台股不小漲");
    assert_eq!(diagnosis.breakdown.score, dec!(0.5));
    assert!(!diagnosis.breakdown.hits[0].negated);
}

#[test]
fn instrument_terms_take_category_priority() {
    let report = pipeline().process(
        vec![SourceBatch::ok("s", vec![item("s", "台積電帶動大盤大漲")])],
        now(),
    );
    assert_eq!(report.buckets.bullish_instrument.len(), 1);
    assert!(report.buckets.bullish_market.is_empty());
}

#[test]
fn buckets_are_ordered_by_strength_with_stable_ties() {
    let items = vec![
        item("s", "台股收紅"),
        item("s", "台股大漲創高"),
        item("s", "加權指數走高"),
        item("s", "台股大漲"),
        item("s", "大盤小跌"),
        item("s", "大盤重挫"),
        item("s", "台股下跌"),
    ];
    let report = pipeline().process(vec![SourceBatch::ok("s", items)], now());

    assert_eq!(
        titles(&report.buckets.bullish_market),
        vec!["台股大漲創高", "台股大漲", "台股收紅", "加權指數走高"]
    );
    assert_eq!(
        scores(&report.buckets.bearish_market),
        vec![dec!(-2.5), dec!(-1.2), dec!(-0.5)]
    );
}

#[test]
fn stale_items_are_dropped_but_undated_items_kept() {
    let pipeline = newspulse::application::Pipeline::new(
        classifier().with_max_age(Duration::hours(24)),
        newspulse::domain::SalienceAggregator::default(),
    );
    let items = vec![
        item("s", "台股大漲").published(now() - Duration::hours(30)),
        item("s", "大盤跌停").published(now() - Duration::hours(2)),
        item("s", "台積電重挫"),
    ];
    let report = pipeline.process(vec![SourceBatch::ok("s", items)], now());
    assert_eq!(report.summary.stale, 1);
    assert_eq!(report.summary.surviving, 2);
}

#[test]
fn failed_sources_degrade_coverage_only() {
    let batches = vec![
        SourceBatch::ok("a", vec![item("a", "台股大漲")]),
        SourceBatch::failed(
            "b",
            FetchError::Status {
                status: 500,
                url: "https://b.example.com/rss".into(),
            },
        ),
    ];
    let report = pipeline().process(batches, now());
    assert_eq!(report.summary.sources_failed, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].reason.contains("500"));
    assert_eq!(report.buckets.len(), 1);
    assert!(!report.all_sources_failed());
}

#[test]
fn repeated_runs_are_deterministic() {
    let items = || {
        vec![
            item("s", "台積電大漲創高"),
            item("s", "大盤跌停"),
            item("s", "聯發科獲利成長"),
            item("s", "台股收黑"),
        ]
    };
    let p = pipeline();
    let first = p.process(vec![SourceBatch::ok("s", items())], now());
    let second = p.process(vec![SourceBatch::ok("s", items())], now());
    assert_eq!(first.buckets, second.buckets);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.salience, second.salience);
}

#[test]
fn salience_ranks_recurring_terms() {
    let items = vec![
        item("s", "台積電大漲 AI 需求強"),
        item("s", "台積電法說會 看好 AI"),
        item("s", "台積電 ADR 重挫"),
        item("s", "聯發科獲利成長"),
    ];
    let report = pipeline().process(vec![SourceBatch::ok("s", items)], now());
    let entries: Vec<_> = report
        .salience
        .entries
        .iter()
        .map(|e| (e.term.as_str(), e.count))
        .collect();
    assert_eq!(entries, vec![("台積電", 3), ("AI", 2)]);
    assert_eq!(report.salience.max_count, 3);
    let ai = &report.salience.entries[1];
    assert!((report.salience.weight(ai) - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn titles_that_clean_to_nothing_are_off_topic_not_duplicates() {
    let items = vec![
        item_at("s", "【快訊】", "https://s.example.com/a"),
        item_at("s", "(圖)", "https://s.example.com/b"),
        item_at("s", "【快訊】", "https://s.example.com/c"),
    ];
    let report = pipeline().process(vec![SourceBatch::ok("s", items)], now());
    assert_eq!(report.summary.off_topic, 3);
    assert_eq!(report.summary.duplicate_fingerprints, 0);
    assert_eq!(report.summary.raw_items, report.summary.dropped());
}

#[test]
fn raw_item_count_balances_against_drops() {
    let items = vec![
        item("s", "台積電大漲創高"),
        item_at("s", "", "https://s.example.com/empty"),
        item("s", "今晚星座運勢"),
        item("s", "天氣晴朗"),
        item("s", "台積電股東會"),
    ];
    let report = pipeline().process(vec![SourceBatch::ok("s", items)], now());
    let s = &report.summary;
    assert_eq!(s.raw_items, 5);
    assert_eq!(s.malformed, 1);
    assert_eq!(s.blacklisted, 1);
    assert_eq!(s.off_topic, 1);
    assert_eq!(s.zero_score, 1);
    assert_eq!(s.surviving, 1);
    assert_eq!(s.raw_items, s.dropped() + s.surviving);
}
