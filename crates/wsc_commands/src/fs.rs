use anyhow::{Result, anyhow};
use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("reading json file {}", path.display());
    let content = read_to_string(path)
        .map_err(|e| anyhow!("unable to read file {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| anyhow!("invalid json in {}: {e}", path.display()))
}
