//! Handler for the `run` command.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::application::Report;
use crate::domain::ScoredItem;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Title")]
    title: String,
}

#[derive(Tabled)]
struct SalienceRow {
    #[tabled(rename = "Term")]
    term: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = load_config(args)?;
    config.init_logging();

    let run = bootstrap::build_run(&config)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Config", args.config.display());
    output::field("Sources", run.sources().len());
    if let Some(hours) = config.pipeline.max_age_hours {
        output::field("Max age", format!("{hours}h"));
    }

    let pb = output::spinner("Fetching feeds");
    let report = run.execute().await;
    if report.all_sources_failed() {
        output::spinner_fail(&pb, "Every source failed");
    } else {
        output::spinner_success(
            &pb,
            &format!(
                "Fetched {} items from {} sources",
                report.summary.raw_items,
                report.summary.sources_total - report.summary.sources_failed
            ),
        );
    }

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        output::note(&format!("Report written to {}", path.display()));
    }

    if output::is_json() {
        output::json_output(serde_json::to_value(&report)?);
    } else {
        render(&report);
    }

    if report.all_sources_failed() {
        return Err(Error::AllSourcesFailed {
            count: report.summary.sources_total,
        });
    }
    Ok(())
}

/// Load the config file and apply CLI overrides.
#[allow(clippy::result_large_err)]
fn load_config(args: &RunArgs) -> Result<Config> {
    let mut config = Config::load(&args.config)?;

    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".into();
    }
    if let Some(hours) = args.max_age_hours {
        if hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_age_hours",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        config.pipeline.max_age_hours = Some(hours);
    }
    Ok(config)
}

fn render(report: &Report) {
    let summary = &report.summary;

    output::section("Market");
    output::field("Mood", output::mood(report.mood));
    output::field("Net score", output::score(report.net_score));

    output::section("Summary");
    output::field("Fetched", summary.raw_items);
    output::field("Surviving", summary.surviving);
    output::field("Duplicates", summary.duplicates());
    output::field(
        "Filtered",
        summary.blacklisted + summary.off_topic + summary.zero_score,
    );
    if output::verbosity() > 0 {
        output::field("Malformed", summary.malformed);
        output::field("Stale", summary.stale);
        output::field("Blacklisted", summary.blacklisted);
        output::field("Off topic", summary.off_topic);
        output::field("Zero score", summary.zero_score);
    }
    for failure in &report.failures {
        output::warning(&format!("{}: {}", failure.source_id, failure.reason));
    }

    let buckets = &report.buckets;
    render_bucket("Bullish / market", &buckets.bullish_market);
    render_bucket("Bullish / instrument", &buckets.bullish_instrument);
    render_bucket("Bearish / market", &buckets.bearish_market);
    render_bucket("Bearish / instrument", &buckets.bearish_instrument);

    output::section("Hot topics");
    if report.salience.entries.is_empty() {
        output::note("No recurring terms");
    } else {
        let rows: Vec<_> = report
            .salience
            .entries
            .iter()
            .map(|entry| SalienceRow {
                term: entry.term.clone(),
                count: entry.count,
                weight: format!("{:.2}", report.salience.weight(entry)),
            })
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    if report.is_empty() {
        output::hint("no headline scored; check the source list or widen --max-age-hours");
    }
}

fn render_bucket(title: &str, items: &[ScoredItem]) {
    output::section(&format!("{title} ({})", items.len()));
    if items.is_empty() {
        output::note("None");
        return;
    }
    let rows: Vec<_> = items
        .iter()
        .map(|item| ItemRow {
            score: output::signed(item.score),
            source: item.source.clone(),
            title: item.title.clone(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
}
