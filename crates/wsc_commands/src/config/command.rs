use crate::command::WscCommand;
use anyhow::Result;
use clap::Args;
use wsc_config::WscConfig;
use wsc_utils::term;

#[derive(Args)]
#[command(about = "Lists the console configuration")]
pub struct ConfigCommand;

impl ConfigCommand {
    fn list_console(config: &WscConfig) -> Result<()> {
        term::print_info("Console configuration:")?;
        println!("{}", serde_yaml_ng::to_string(&config.console)?);
        Ok(())
    }
}

impl WscCommand for ConfigCommand {
    fn exec(self) -> Result<()> {
        let config = WscConfig::load_or_default()?;
        Self::list_console(&config)
    }
}
