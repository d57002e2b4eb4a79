use crate::definitions;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WscConsoleConfig {
    #[serde(default = "WscConsoleConfig::default_owner_role")]
    pub owner_role: String,

    #[serde(default = "WscConsoleConfig::default_can_debug")]
    pub can_debug: bool,

    #[serde(default = "WscConsoleConfig::default_can_change_versions")]
    pub can_change_versions: bool,
}

impl WscConsoleConfig {
    fn default_owner_role() -> String {
        definitions::CONSOLE_OWNER_ROLE.to_owned()
    }

    fn default_can_debug() -> bool {
        definitions::CONSOLE_CAN_DEBUG
    }

    fn default_can_change_versions() -> bool {
        definitions::CONSOLE_CAN_CHANGE_VERSIONS
    }

    pub fn debug_info(&self) {
        debug!("loaded console configuration");
        debug!("console > owner-role: {}", self.owner_role);
        debug!("console > can-debug: {}", self.can_debug);
        debug!("console > can-change-versions: {}", self.can_change_versions);
    }
}

impl Default for WscConsoleConfig {
    fn default() -> Self {
        Self {
            owner_role: Self::default_owner_role(),
            can_debug: Self::default_can_debug(),
            can_change_versions: Self::default_can_change_versions(),
        }
    }
}
