use std::collections::BTreeMap;
use wsc_models::dtos::{
    AutomaticUpdates, ProvisionerJob, TemplateVersion, TemplateVersionVariable, VariableType,
    Workspace, WorkspaceBuild, WorkspaceBuildParameter, WorkspaceStatus, WorkspaceTransition,
};

pub const STATUSES: [WorkspaceStatus; 10] = [
    WorkspaceStatus::Pending,
    WorkspaceStatus::Starting,
    WorkspaceStatus::Running,
    WorkspaceStatus::Stopping,
    WorkspaceStatus::Stopped,
    WorkspaceStatus::Failed,
    WorkspaceStatus::Canceling,
    WorkspaceStatus::Canceled,
    WorkspaceStatus::Deleting,
    WorkspaceStatus::Deleted,
];

pub fn status_from_name(name: &str) -> Option<WorkspaceStatus> {
    STATUSES.into_iter().find(|s| s.to_string() == name)
}

pub fn template_version() -> TemplateVersion {
    let mut tags = BTreeMap::new();
    tags.insert("scope".to_string(), "organization".to_string());
    TemplateVersion {
        id: "a8c3d4f2-6b51-4bb0-9d1e-3c0f1f8e7a10".to_string(),
        template_id: Some("5e2f9b1c-2d4a-4e8f-b7c6-0a9d8e7f6c5b".to_string()),
        name: "eager_turing".to_string(),
        job: ProvisionerJob {
            id: "c1d2e3f4-1111-2222-3333-444455556666".to_string(),
            file_id: "f0e1d2c3-7777-8888-9999-aaaabbbbcccc".to_string(),
            tags,
        },
    }
}

pub fn template_variables() -> Vec<TemplateVersionVariable> {
    vec![
        TemplateVersionVariable {
            name: "region".to_string(),
            description: "Cloud region the workspaces are created in".to_string(),
            var_type: VariableType::String,
            default_value: "eu-west-1".to_string(),
            required: true,
            ..Default::default()
        },
        TemplateVersionVariable {
            name: "instance_count".to_string(),
            description: "Number of instances per workspace".to_string(),
            var_type: VariableType::Number,
            default_value: "1".to_string(),
            value: "2".to_string(),
            ..Default::default()
        },
        TemplateVersionVariable {
            name: "enable_gpu".to_string(),
            var_type: VariableType::Bool,
            default_value: "false".to_string(),
            ..Default::default()
        },
        TemplateVersionVariable {
            name: "api_token".to_string(),
            description: "Token used by the provisioner".to_string(),
            var_type: VariableType::String,
            value: "stored-secret".to_string(),
            required: true,
            sensitive: true,
            ..Default::default()
        },
        TemplateVersionVariable {
            name: "project".to_string(),
            var_type: VariableType::String,
            required: true,
            ..Default::default()
        },
    ]
}

pub fn workspace(status: WorkspaceStatus) -> Workspace {
    Workspace {
        id: "0b5a6c7d-8e9f-4a1b-2c3d-4e5f6a7b8c9d".to_string(),
        name: "dev".to_string(),
        owner_name: "admin".to_string(),
        template_name: "docker".to_string(),
        template_version_id: "a8c3d4f2-6b51-4bb0-9d1e-3c0f1f8e7a10".to_string(),
        latest_build: WorkspaceBuild {
            id: "9f8e7d6c-5b4a-3928-1706-f5e4d3c2b1a0".to_string(),
            build_number: 4,
            transition: WorkspaceTransition::Start,
            status,
        },
        automatic_updates: AutomaticUpdates::Never,
        ..Default::default()
    }
}

pub fn build_parameters() -> Vec<WorkspaceBuildParameter> {
    vec![
        WorkspaceBuildParameter::new("cpu", "2"),
        WorkspaceBuildParameter::new("dotfiles_uri", "https://github.com/example/dotfiles"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_is_found_by_name() {
        for status in STATUSES {
            assert_eq!(status_from_name(&status.to_string()), Some(status));
        }
        assert_eq!(status_from_name("sleeping"), None);
    }

    #[test]
    fn fixture_variables_have_unique_names() {
        let variables = template_variables();
        let mut names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), variables.len());
    }
}
