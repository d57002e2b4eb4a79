use anyhow::{Result, anyhow};
use wsc_models::dtos::{Workspace, WorkspaceBuildParameter};

/// The route of the create workspace page, prefilled with the settings and
/// build parameters of `workspace`.
pub fn duplicate_workspace_url(
    workspace: &Workspace,
    build_parameters: &[WorkspaceBuildParameter],
) -> Result<String> {
    let mut query = vec![
        ("mode".to_string(), "duplicate".to_string()),
        ("name".to_string(), format!("{}-copy", workspace.name)),
        ("version".to_string(), workspace.template_version_id.clone()),
    ];
    query.extend(
        build_parameters
            .iter()
            .map(|p| (format!("param.{}", p.name), p.value.clone())),
    );

    let query = serde_urlencoded::to_string(&query).map_err(|e| anyhow!(e))?;
    Ok(format!(
        "/templates/{}/workspace?{query}",
        workspace.template_name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Workspace {
        Workspace {
            id: "ws-1".to_string(),
            name: "dev".to_string(),
            template_name: "docker".to_string(),
            template_version_id: "v-42".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn url_without_parameters() {
        let url = duplicate_workspace_url(&workspace(), &[]).unwrap();
        assert_eq!(
            url,
            "/templates/docker/workspace?mode=duplicate&name=dev-copy&version=v-42"
        );
    }

    #[test]
    fn parameters_are_encoded() {
        let params = vec![
            WorkspaceBuildParameter::new("region", "eu-west-1"),
            WorkspaceBuildParameter::new("motd", "hello world&more"),
        ];
        let url = duplicate_workspace_url(&workspace(), &params).unwrap();
        assert!(url.ends_with("&param.region=eu-west-1&param.motd=hello+world%26more"));
    }
}
