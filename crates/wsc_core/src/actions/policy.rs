use super::ActionType;
use wsc_models::dtos::{Workspace, WorkspaceStatus};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbilityOptions {
    pub can_debug: bool,
    pub is_owner: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkspaceAbilities {
    pub actions: Vec<ActionType>,
    pub can_cancel: bool,
    pub can_accept_jobs: bool,
}

impl WorkspaceAbilities {
    fn new(actions: Vec<ActionType>, can_cancel: bool, can_accept_jobs: bool) -> Self {
        Self {
            actions,
            can_cancel,
            can_accept_jobs,
        }
    }
}

/// Decides which actions apply to a workspace in its current state.
pub trait AbilitiesPolicy {
    fn abilities(&self, workspace: &Workspace, options: AbilityOptions) -> WorkspaceAbilities;
}

/// Derives the abilities from the status of the latest build.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusAbilities;

impl StatusAbilities {
    fn with_update(workspace: &Workspace, mut actions: Vec<ActionType>) -> Vec<ActionType> {
        if workspace.outdated {
            actions.insert(0, ActionType::Update);
        }
        actions
    }

    fn requires_update(workspace: &Workspace) -> bool {
        workspace.outdated && workspace.template_require_active_version
    }
}

impl AbilitiesPolicy for StatusAbilities {
    fn abilities(&self, workspace: &Workspace, options: AbilityOptions) -> WorkspaceAbilities {
        if workspace.is_dormant() {
            return WorkspaceAbilities::new(vec![ActionType::Activate], false, false);
        }

        match workspace.latest_build.status {
            WorkspaceStatus::Starting => {
                WorkspaceAbilities::new(vec![ActionType::Starting], true, false)
            }
            WorkspaceStatus::Running => {
                let actions = if Self::requires_update(workspace) {
                    vec![ActionType::Stop, ActionType::UpdateAndRestart]
                } else {
                    Self::with_update(workspace, vec![ActionType::Stop, ActionType::Restart])
                };
                WorkspaceAbilities::new(actions, false, true)
            }
            WorkspaceStatus::Stopping => {
                WorkspaceAbilities::new(vec![ActionType::Stopping], true, false)
            }
            WorkspaceStatus::Stopped => {
                let actions = if Self::requires_update(workspace) {
                    vec![ActionType::UpdateAndStart]
                } else {
                    Self::with_update(workspace, vec![ActionType::Start])
                };
                WorkspaceAbilities::new(actions, false, true)
            }
            WorkspaceStatus::Canceled => {
                WorkspaceAbilities::new(vec![ActionType::Start, ActionType::Stop], false, true)
            }
            WorkspaceStatus::Failed => {
                let mut actions = vec![ActionType::Retry];
                if options.can_debug || options.is_owner {
                    actions.push(ActionType::Debug);
                }
                WorkspaceAbilities::new(Self::with_update(workspace, actions), false, true)
            }
            WorkspaceStatus::Canceling => {
                WorkspaceAbilities::new(vec![ActionType::Canceling], false, false)
            }
            WorkspaceStatus::Deleting => {
                WorkspaceAbilities::new(vec![ActionType::Deleting], true, false)
            }
            WorkspaceStatus::Deleted => {
                WorkspaceAbilities::new(vec![ActionType::Deleted], false, true)
            }
            WorkspaceStatus::Pending => {
                WorkspaceAbilities::new(vec![ActionType::Pending], false, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsc_models::dtos::WorkspaceBuild;

    fn workspace(status: WorkspaceStatus) -> Workspace {
        Workspace {
            id: "ws-1".to_string(),
            latest_build: WorkspaceBuild {
                status,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn abilities(workspace: &Workspace) -> WorkspaceAbilities {
        StatusAbilities.abilities(workspace, AbilityOptions::default())
    }

    #[test]
    fn running_workspace_can_stop_and_restart() {
        let abilities = abilities(&workspace(WorkspaceStatus::Running));
        assert_eq!(abilities.actions, vec![ActionType::Stop, ActionType::Restart]);
        assert!(!abilities.can_cancel);
        assert!(abilities.can_accept_jobs);
    }

    #[test]
    fn outdated_running_workspace_offers_update_first() {
        let mut ws = workspace(WorkspaceStatus::Running);
        ws.outdated = true;

        assert_eq!(
            abilities(&ws).actions,
            vec![ActionType::Update, ActionType::Stop, ActionType::Restart]
        );
    }

    #[test]
    fn required_active_version_combines_update_and_restart() {
        let mut ws = workspace(WorkspaceStatus::Running);
        ws.outdated = true;
        ws.template_require_active_version = true;

        assert_eq!(
            abilities(&ws).actions,
            vec![ActionType::Stop, ActionType::UpdateAndRestart]
        );
    }

    #[test]
    fn stopped_workspace_can_start() {
        let mut ws = workspace(WorkspaceStatus::Stopped);
        assert_eq!(abilities(&ws).actions, vec![ActionType::Start]);

        ws.outdated = true;
        ws.template_require_active_version = true;
        assert_eq!(abilities(&ws).actions, vec![ActionType::UpdateAndStart]);
    }

    #[test]
    fn transitions_in_progress_can_be_canceled() {
        for (status, action) in [
            (WorkspaceStatus::Starting, ActionType::Starting),
            (WorkspaceStatus::Stopping, ActionType::Stopping),
            (WorkspaceStatus::Deleting, ActionType::Deleting),
        ] {
            let abilities = abilities(&workspace(status));
            assert_eq!(abilities.actions, vec![action]);
            assert!(abilities.can_cancel);
            assert!(!abilities.can_accept_jobs);
        }
    }

    #[test]
    fn failed_workspace_debug_needs_permission() {
        let ws = workspace(WorkspaceStatus::Failed);
        assert_eq!(abilities(&ws).actions, vec![ActionType::Retry]);

        let options = AbilityOptions {
            can_debug: true,
            is_owner: false,
        };
        assert_eq!(
            StatusAbilities.abilities(&ws, options).actions,
            vec![ActionType::Retry, ActionType::Debug]
        );

        let options = AbilityOptions {
            can_debug: false,
            is_owner: true,
        };
        assert_eq!(
            StatusAbilities.abilities(&ws, options).actions,
            vec![ActionType::Retry, ActionType::Debug]
        );
    }

    #[test]
    fn dormant_workspace_can_only_be_activated() {
        let mut ws = workspace(WorkspaceStatus::Running);
        ws.dormant_at = Some("2024-01-01T00:00:00Z".to_string());

        let abilities = abilities(&ws);
        assert_eq!(abilities.actions, vec![ActionType::Activate]);
        assert!(!abilities.can_accept_jobs);
    }

    #[test]
    fn pending_and_canceling_accept_no_jobs() {
        for status in [WorkspaceStatus::Pending, WorkspaceStatus::Canceling] {
            let abilities = abilities(&workspace(status));
            assert!(!abilities.can_cancel);
            assert!(!abilities.can_accept_jobs);
        }
    }
}
