//! Handler for `check config`.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::WeightClass;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate a configuration file without fetching anything.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let terms = config.term_table();
    let enabled = config.enabled_sources().count();

    if output::is_json() {
        let classes: serde_json::Map<_, _> = WeightClass::ALL
            .iter()
            .map(|class| (class.name().to_string(), json!(terms.class(*class).len())))
            .collect();
        output::json_output(json!({
            "command": "check.config",
            "valid": true,
            "config": path.display().to_string(),
            "sources": { "total": config.sources.len(), "enabled": enabled },
            "terms": {
                "classes": classes,
                "negation": terms.negation().len(),
                "whitelist": terms.whitelist().len(),
                "blacklist": terms.blacklist().len(),
                "instrument": terms.instrument().len(),
                "macro": terms.macro_terms().len(),
                "events": terms.events().len(),
            },
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Sources");
    output::field("Total", config.sources.len());
    output::field("Enabled", enabled);
    if enabled == 0 {
        output::warning("Every source is disabled; `run` will produce an empty report");
    }
    if output::verbosity() > 0 {
        for source in &config.sources {
            let state = if source.enabled { "" } else { " (disabled)" };
            output::field(&source.id, format!("{}{state}", source.url));
        }
    }

    output::section("Terms");
    for class in WeightClass::ALL {
        output::field(class.name(), terms.class(class).len());
    }
    output::field("negation", terms.negation().len());
    output::field("whitelist", terms.whitelist().len());
    output::field("blacklist", terms.blacklist().len());
    output::field("instrument", terms.instrument().len());
    output::field("macro", terms.macro_terms().len());
    output::field("events", terms.events().len());

    output::success("Configuration check complete");
    Ok(())
}
