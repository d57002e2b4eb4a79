use wsc_models::dtos::{AutomaticUpdates, Workspace};

pub const REQUIRE_ACTIVE_VERSION_OVERRIDE_MESSAGE: &str = "This template requires automatic updates on workspace startup, but template administrators can ignore this policy.";

pub const AUTOMATIC_UPDATES_MESSAGE: &str = "Automatic updates are enabled for this workspace. Modify the update policy in workspace settings if you want to preserve the template version.";

/// An outdated workspace has to be updated before it can start when it opted
/// into automatic updates, or when its template requires the active version
/// and the user cannot override that.
pub fn must_update_workspace(workspace: &Workspace, can_change_versions: bool) -> bool {
    workspace.outdated
        && (workspace.automatic_updates == AutomaticUpdates::Always
            || (workspace.template_require_active_version && !can_change_versions))
}

pub fn tooltip_text(workspace: &Workspace, must_update: bool, can_change_versions: bool) -> String {
    if !must_update && !can_change_versions {
        return String::new();
    }

    if !must_update && can_change_versions && workspace.template_require_active_version {
        return REQUIRE_ACTIVE_VERSION_OVERRIDE_MESSAGE.to_string();
    }

    if workspace.automatic_updates == AutomaticUpdates::Always {
        return AUTOMATIC_UPDATES_MESSAGE.to_string();
    }

    String::new()
}
