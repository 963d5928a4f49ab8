//! Terminal output for the CLI.
//!
//! Stdout carries the result of a command. In `--json` mode that result is
//! exactly one JSON document written by [`json_output`], so every progress
//! helper (header, fields, sections, spinners, notes) stays silent. Warnings
//! and errors always go to stderr, as JSON lines when `--json` is set.
//! `--quiet` silences progress output in human mode.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::MarketMood;

/// Output mode selected by the global flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Print one JSON document instead of human-readable text.
    pub json: bool,
    /// Skip progress output.
    pub quiet: bool,
    /// Extra detail level from repeated `-v`.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Whether progress text may be written to stdout.
    const fn shows_progress(self) -> bool {
        !self.json && !self.quiet
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    *config_cell().read()
}

fn progress_enabled() -> bool {
    current().shows_progress()
}

/// Diagnostic line on stderr, so stdout stays parseable in JSON mode.
fn emit_diagnostic(kind: &str, message: &str) {
    eprintln!(
        "{}",
        json!({
            "type": kind,
            "payload": { "message": message },
        })
    );
}

/// Apply the global CLI flags. Call once, before any output.
pub fn configure(config: OutputConfig) {
    *config_cell().write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Application name and version.
pub fn header(version: &str) {
    if !progress_enabled() {
        return;
    }
    println!("{} {}", "newspulse".bold(), version.dimmed());
    println!();
}

/// Labeled value, aligned under the current section.
pub fn field(label: &str, value: impl Display) {
    if !progress_enabled() {
        return;
    }
    println!("  {:<12} {}", label.dimmed(), value);
}

pub fn success(message: &str) {
    if !progress_enabled() {
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Shown even with `--quiet`.
pub fn warning(message: &str) {
    if is_json() {
        emit_diagnostic("warning", message);
        return;
    }
    eprintln!("  {} {}", "⚠".yellow(), message);
}

pub fn error(message: &str) {
    if is_json() {
        emit_diagnostic("error", message);
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

pub fn section(title: &str) {
    if !progress_enabled() {
        return;
    }
    println!();
    println!("{}", title.bold());
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner on stderr. Hidden in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if !progress_enabled() {
        return indicatif::ProgressBar::hidden();
    }

    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .tick_strings(BRAILLE_SPINNER)
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    if pb.is_hidden() {
        return;
    }
    pb.finish_with_message(format!("{} {}", "✓".green(), message));
}

pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    if pb.is_hidden() {
        return;
    }
    pb.finish_with_message(format!("{} {}", "×".red(), message));
}

fn colored(value: impl Display, paint: impl FnOnce(&str) -> String) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    paint(&value)
}

pub fn positive(value: impl Display) -> String {
    colored(value, |v| v.green().to_string())
}

pub fn negative(value: impl Display) -> String {
    colored(value, |v| v.red().to_string())
}

pub fn highlight(value: impl Display) -> String {
    colored(value, |v| v.cyan().to_string())
}

pub fn muted(value: impl Display) -> String {
    colored(value, |v| v.dimmed().to_string())
}

/// Score with an explicit `+` on bullish values. Plain text, for table cells.
#[must_use]
pub fn signed(value: Decimal) -> String {
    if value.is_sign_positive() && !value.is_zero() {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// [`signed`] score, green when bullish and red when bearish.
pub fn score(value: Decimal) -> String {
    if value.is_zero() {
        signed(value)
    } else if value.is_sign_positive() {
        positive(signed(value))
    } else {
        negative(signed(value))
    }
}

pub fn mood(value: MarketMood) -> String {
    match value {
        MarketMood::Bullish => positive(value),
        MarketMood::Bearish => negative(value),
        MarketMood::Neutral => muted(value),
    }
}

pub fn note(message: &str) {
    if !progress_enabled() {
        return;
    }
    println!("  {}", message.dimmed());
}

/// `hint:`-prefixed suggestion.
pub fn hint(message: &str) {
    if !progress_enabled() {
        return;
    }
    println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
}

/// Indented block, e.g. a rendered table.
pub fn lines(content: &str) {
    if !progress_enabled() {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// The one JSON document a `--json` invocation prints.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
