use crate::actions::ActionsCommand;
use crate::command::WscCommand;
use crate::config::ConfigCommand;
use crate::variables::VariablesCommand;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use wsc_config::definitions::VERSION;

#[derive(Subcommand)]
enum Commands {
    Variables(VariablesCommand),
    Actions(ActionsCommand),
    Config(ConfigCommand),
}

#[derive(Parser)]
#[command(name = "wsc", version = VERSION, about = "Workspace console tooling")]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn tracing_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }

    fn tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.tracing_level())
            .init()
    }
}

impl WscCommand for Cli {
    fn exec(self) -> Result<()> {
        self.tracing();

        match self.command {
            Commands::Variables(variables) => variables.exec(),
            Commands::Actions(actions) => actions.exec(),
            Commands::Config(config) => config.exec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_verbose_flag_sets_debug_level() {
        let cli = Cli::try_parse_from(["wsc", "-v", "config"]).unwrap();
        assert_eq!(cli.tracing_level(), LevelFilter::DEBUG);

        let cli = Cli::try_parse_from(["wsc", "config"]).unwrap();
        assert_eq!(cli.tracing_level(), LevelFilter::INFO);
    }

    #[test]
    fn cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["wsc"]).is_err());
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["wsc", "run"]).is_err());
    }
}
