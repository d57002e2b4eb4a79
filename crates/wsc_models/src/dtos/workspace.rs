use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceTransition {
    #[default]
    Start,
    Stop,
    Delete,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceStatus {
    #[default]
    Pending,
    Starting,
    Running,
    Stopping,
    Stopped,
    Failed,
    Canceling,
    Canceled,
    Deleting,
    Deleted,
}

impl std::fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Pending => "pending",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
            Self::Canceling => "canceling",
            Self::Canceled => "canceled",
            Self::Deleting => "deleting",
            Self::Deleted => "deleted",
        };
        write!(f, "{status}")
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomaticUpdates {
    Always,
    #[default]
    Never,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBuild {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub build_number: u32,
    pub transition: WorkspaceTransition,
    pub status: WorkspaceStatus,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub template_version_id: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dormant_at: Option<String>,
    pub latest_build: WorkspaceBuild,
    #[serde(default)]
    pub automatic_updates: AutomaticUpdates,
    #[serde(default)]
    pub template_require_active_version: bool,
}

impl Workspace {
    pub fn is_dormant(&self) -> bool {
        self.dormant_at.is_some()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBuildParameter {
    pub name: String,
    pub value: String,
}

impl WorkspaceBuildParameter {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}
