pub const VERSION: &str = "0.1";
pub const TOOL_DIR: &str = ".wsc";
pub const TOOL_DEFAULT_CONFIG_FILE: &str = "config.yaml";

pub const CONSOLE_OWNER_ROLE: &str = "owner";
pub const CONSOLE_CAN_DEBUG: bool = false;
pub const CONSOLE_CAN_CHANGE_VERSIONS: bool = false;
