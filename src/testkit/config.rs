//! Canonical test configurations.
//!
//! Single source of truth for config documents used across tests.

use crate::infrastructure::config::settings::Config;

/// TOML with one `[[sources]]` entry per id, pointing at example.com.
pub fn sources_toml(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| format!("[[sources]]\nid = \"{id}\"\nurl = \"https://{id}.example.com/rss\"\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A validated config over the given source ids with default sections.
pub fn with_sources(ids: &[&str]) -> Config {
    match Config::parse_toml(&sources_toml(ids)) {
        Ok(config) => config,
        Err(e) => panic!("test config should parse: {e}"),
    }
}
