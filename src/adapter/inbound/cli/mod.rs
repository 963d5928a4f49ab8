//! CLI module graph.

pub mod check;
pub mod command;
pub mod output;
pub mod run;
pub mod score;

use command::{CheckCommand, Cli, Commands};

use crate::error::Result;

/// Apply global output flags and run the selected subcommand.
pub async fn dispatch(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Score(args) => score::execute(&args),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
    }
}
