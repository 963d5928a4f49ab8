//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section except `[[sources]]`
//! has working defaults.
//!
//! # Example
//!
//! ```no_run
//! use newspulse::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::pipeline::{NormalizerConfig, PipelineConfig};
use super::source::{FetchConfig, SourceConfig};
use super::terms::TermsConfig;
use crate::domain::{TermTable, TitleNormalizer};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feeds to scan, in arrival order.
    ///
    /// Order matters: items with equal scores are listed in the order
    /// their sources appear here.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    /// HTTP retrieval settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Recency window and salience limits.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Title cleanup patterns.
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Keyword lists.
    #[serde(default)]
    pub terms: TermsConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., duplicate source ids, bad regex)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(ConfigError::MissingField { field: "sources" }.into());
        }

        let mut ids = HashSet::new();
        for source in &self.sources {
            if source.id.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "sources.id" }.into());
            }
            if !ids.insert(source.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "sources.id",
                    reason: format!("duplicate source id '{}'", source.id),
                }
                .into());
            }
            if source.url.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "sources.url" }.into());
            }
            let url = Url::parse(&source.url).map_err(|e| ConfigError::InvalidValue {
                field: "sources.url",
                reason: format!("{}: {e}", source.url),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    field: "sources.url",
                    reason: format!("{}: scheme must be http or https", source.url),
                }
                .into());
            }
        }

        if self.fetch.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.fetch.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.fetch.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.pipeline.max_age_hours == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_age_hours",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        if self.pipeline.salience_top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "salience_top_n",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.pipeline.mood_bearish_below > self.pipeline.mood_bullish_above {
            return Err(ConfigError::InvalidValue {
                field: "mood_bearish_below",
                reason: "must not exceed mood_bullish_above".to_string(),
            }
            .into());
        }

        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("unknown log format '{}'", self.logging.format),
            }
            .into());
        }

        self.title_normalizer()?;
        self.terms.validate()?;
        Ok(())
    }

    /// Sources that should be fetched this run.
    pub fn enabled_sources(&self) -> impl Iterator<Item = &SourceConfig> {
        self.sources.iter().filter(|s| s.enabled)
    }

    /// Build the keyword table for the engine.
    #[must_use]
    pub fn term_table(&self) -> TermTable {
        self.terms.to_table()
    }

    /// Compile the configured suffix patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first pattern that does
    /// not compile.
    pub fn title_normalizer(&self) -> std::result::Result<TitleNormalizer, ConfigError> {
        TitleNormalizer::new(&self.normalizer.suffix_patterns).map_err(|e| {
            ConfigError::InvalidValue {
                field: "suffix_patterns",
                reason: e.to_string(),
            }
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
