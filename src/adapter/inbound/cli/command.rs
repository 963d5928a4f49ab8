//! Command-line interface definitions.
//!
//! Defines the CLI structure for newspulse using `clap`: a one-shot scan
//! (`run`), a single-headline trace (`score`) and config validation
//! (`check config`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Headline sentiment scanner for financial news feeds
#[derive(Parser, Debug)]
#[command(name = "newspulse")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the newspulse CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every enabled source and print the ranked buckets
    Run(RunArgs),

    /// Trace a single headline through cleanup, gating and scoring
    Score(ScoreArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `newspulse check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
///
/// CLI flags override the corresponding config file values.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,

    /// Drop dated items older than this many hours.
    #[arg(long)]
    pub max_age_hours: Option<u64>,

    /// Also write the full report as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `score` subcommand.
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Raw headline text.
    pub title: String,

    /// Configuration file supplying custom terms. Built-in terms are used
    /// when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from(["newspulse", "run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run(_)));
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["newspulse", "run", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_run_args_defaults() {
        let cli = Cli::try_parse_from(["newspulse", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG));
        assert!(args.log_level.is_none());
        assert!(!args.json_logs);
        assert!(args.max_age_hours.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_run_args_overrides() {
        let cli = Cli::try_parse_from([
            "newspulse",
            "run",
            "--config",
            "alt.toml",
            "--log-level",
            "debug",
            "--max-age-hours",
            "12",
            "-o",
            "report.json",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.config, PathBuf::from("alt.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.max_age_hours, Some(12));
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_score_requires_title() {
        assert!(Cli::try_parse_from(["newspulse", "score"]).is_err());
        let cli = Cli::try_parse_from(["newspulse", "score", "台積電大漲"]).unwrap();
        let Commands::Score(args) = cli.command else {
            panic!("Expected Score command");
        };
        assert_eq!(args.title, "台積電大漲");
        assert!(args.config.is_none());
    }

    #[test]
    fn test_check_config_path() {
        let cli = Cli::try_parse_from(["newspulse", "check", "config", "-c", "x.toml"]).unwrap();
        let Commands::Check(CheckCommand::Config(arg)) = cli.command else {
            panic!("Expected check config");
        };
        assert_eq!(arg.config, PathBuf::from("x.toml"));
    }
}
