use wsc_models::dtos::Workspace;

pub fn build_logs_file_name(workspace: &Workspace) -> String {
    format!(
        "{}-{}-build-{}.log",
        workspace.owner_name, workspace.name, workspace.latest_build.build_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsc_models::dtos::WorkspaceBuild;

    #[test]
    fn file_name_contains_owner_workspace_and_build() {
        let workspace = Workspace {
            name: "dev".to_string(),
            owner_name: "alice".to_string(),
            latest_build: WorkspaceBuild {
                build_number: 7,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(build_logs_file_name(&workspace), "alice-dev-build-7.log");
    }
}
