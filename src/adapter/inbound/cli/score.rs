//! Handler for the `score` command.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ScoreArgs;
use crate::adapter::inbound::cli::output;
use crate::application::{Classifier, Diagnosis};
use crate::domain::{Relevance, TermTable, TitleNormalizer};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "Term")]
    term: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Negated")]
    negated: &'static str,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

/// Trace one headline through the engine without touching the network.
pub fn execute(args: &ScoreArgs) -> Result<()> {
    let classifier = match &args.config {
        Some(path) => bootstrap::build_classifier(&Config::load(path)?)?,
        None => Classifier::new(
            std::sync::Arc::new(TermTable::default()),
            std::sync::Arc::new(TitleNormalizer::default()),
        ),
    };

    let diagnosis = classifier.diagnose(&args.title);

    if output::is_json() {
        output::json_output(serde_json::to_value(&diagnosis)?);
        return Ok(());
    }
    render(&diagnosis);
    Ok(())
}

fn render(diagnosis: &Diagnosis) {
    output::section("Headline");
    output::field("Title", &diagnosis.title.text);
    if output::verbosity() > 0 {
        output::field("Fingerprint", output::muted(&diagnosis.title.fingerprint));
    }

    let verdict = match &diagnosis.relevance {
        Relevance::Relevant { topic } => format!("relevant ({topic})"),
        Relevance::Blacklisted { term } => output::negative(format!("blacklisted ({term})")),
        Relevance::OffTopic => output::muted("off topic"),
    };
    output::field("Relevance", verdict);

    output::section("Score");
    if diagnosis.breakdown.hits.is_empty() {
        output::note("No sentiment terms matched");
    } else {
        let rows: Vec<_> = diagnosis
            .breakdown
            .hits
            .iter()
            .map(|hit| HitRow {
                term: hit.term.clone(),
                class: hit.class.to_string(),
                negated: if hit.negated { "yes" } else { "" },
                contribution: hit.contribution.to_string(),
            })
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    output::field("Total", output::score(diagnosis.breakdown.score));

    match diagnosis.category {
        Some(category) => output::field("Category", output::highlight(category)),
        None => output::field("Category", output::muted("not bucketed")),
    }
}
