mod console;
pub mod definitions;

pub use console::*;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WscConfig {
    #[serde(default)]
    pub console: WscConsoleConfig,
}

impl WscConfig {
    pub fn path() -> Result<PathBuf> {
        let mut path = std::env::current_dir()?;
        path.push(definitions::TOOL_DIR);
        path.push(definitions::TOOL_DEFAULT_CONFIG_FILE);
        Ok(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading config file from: {}", path.display());
        let content = read_to_string(path)
            .map_err(|e| anyhow!("unable to read config file {}: {e}", path.display()))?;
        Self::parse(&content)
    }

    /// Falls back to the default configuration when no config file exists.
    /// A config file that exists but cannot be parsed is still an error.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::path()?;
        if !path.is_file() {
            debug!("no config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(content).map_err(|e| anyhow!(e))?;
        config.console.debug_info();
        Ok(config)
    }
}
