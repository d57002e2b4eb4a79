mod policy;
mod update;

pub use policy::*;
pub use update::*;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wsc_models::dtos::{Workspace, WorkspaceTransition};

/// Every control the actions bar knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Update,
    UpdateAndStart,
    UpdateAndRestart,
    Updating,
    Start,
    Starting,
    Stop,
    Stopping,
    Restart,
    Restarting,
    Deleting,
    Canceling,
    Deleted,
    Pending,
    Activate,
    Activating,
    Retry,
    Debug,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::UpdateAndStart => "updateAndStart",
            Self::UpdateAndRestart => "updateAndRestart",
            Self::Updating => "updating",
            Self::Start => "start",
            Self::Starting => "starting",
            Self::Stop => "stop",
            Self::Stopping => "stopping",
            Self::Restart => "restart",
            Self::Restarting => "restarting",
            Self::Deleting => "deleting",
            Self::Canceling => "canceling",
            Self::Deleted => "deleted",
            Self::Pending => "pending",
            Self::Activate => "activate",
            Self::Activating => "activating",
            Self::Retry => "retry",
            Self::Debug => "debug",
        }
    }

    /// The text of the rendered control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Update => "Update",
            Self::UpdateAndStart => "Update and start",
            Self::UpdateAndRestart => "Update and restart",
            Self::Updating => "Updating",
            Self::Start => "Start",
            Self::Starting => "Starting",
            Self::Stop => "Stop",
            Self::Stopping => "Stopping",
            Self::Restart => "Restart",
            Self::Restarting => "Restarting",
            Self::Deleting => "Deleting",
            Self::Canceling => "Canceling...",
            Self::Deleted => "Deleted",
            Self::Pending => "Pending...",
            Self::Activate => "Activate",
            Self::Activating => "Activating",
            Self::Retry => "Retry",
            Self::Debug => "Debug",
        }
    }

    /// Controls that show a spinner while a job is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::Updating | Self::Starting | Self::Stopping | Self::Restarting | Self::Activating
        )
    }

    /// Controls rendered as a plain disabled button with no handler.
    pub fn is_status_only(&self) -> bool {
        matches!(
            self,
            Self::Deleting | Self::Canceling | Self::Deleted | Self::Pending
        )
    }

    /// Controls that are blocked while the workspace must be updated first.
    pub fn is_blocked_by_update(&self) -> bool {
        matches!(
            self,
            Self::Start | Self::Starting | Self::Restart | Self::Restarting
        )
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flags the parent container passes to the actions bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionBarFlags {
    pub is_updating: bool,
    pub is_restarting: bool,
    pub can_change_versions: bool,
    pub can_debug: bool,
    pub is_owner: bool,
}

/// What the actions bar shows for a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBar {
    pub actions: Vec<ActionType>,
    pub can_cancel: bool,
    pub menu_enabled: bool,
    pub must_update: bool,
    pub tooltip: String,
    pub show_change_version: bool,
    pub favorite: bool,
    pub build_parameters_enabled: bool,
}

impl ActionBar {
    pub fn resolve(
        workspace: &Workspace,
        policy: &dyn AbilitiesPolicy,
        flags: ActionBarFlags,
    ) -> Self {
        let abilities = policy.abilities(
            workspace,
            AbilityOptions {
                can_debug: flags.can_debug,
                is_owner: flags.is_owner,
            },
        );
        let must_update = must_update_workspace(workspace, flags.can_change_versions);
        let tooltip = tooltip_text(workspace, must_update, flags.can_change_versions);

        // An in-flight restart would otherwise show up as stopping.
        let actions = if flags.is_updating {
            vec![ActionType::Updating]
        } else if flags.is_restarting {
            vec![ActionType::Restarting]
        } else {
            abilities.actions
        };

        debug!(
            "resolved actions [{}] for workspace {}",
            actions
                .iter()
                .map(ActionType::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            workspace.id
        );

        Self {
            actions,
            can_cancel: abilities.can_cancel,
            menu_enabled: abilities.can_accept_jobs,
            must_update,
            tooltip,
            show_change_version: flags.can_change_versions,
            favorite: workspace.favorite,
            build_parameters_enabled: workspace.latest_build.transition
                == WorkspaceTransition::Start,
        }
    }

    /// Whether the control of `action` is disabled in this bar.
    pub fn is_disabled(&self, action: ActionType) -> bool {
        action.is_status_only() || (self.must_update && action.is_blocked_by_update())
    }

    /// The tooltip of the control of `action`. Start and restart controls
    /// carry the update policy message even when no update is required.
    pub fn tooltip_for(&self, action: ActionType) -> &str {
        if action.is_blocked_by_update() {
            &self.tooltip
        } else {
            ""
        }
    }
}
