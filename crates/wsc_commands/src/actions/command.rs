use crate::command::WscCommand;
use crate::fs::read_json;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;
use wsc_config::{WscConfig, WscConsoleConfig};
use wsc_core::actions::{ActionBar, ActionBarFlags, StatusAbilities};
use wsc_core::duplication::duplicate_workspace_url;
use wsc_core::logs::build_logs_file_name;
use wsc_models::dtos::{User, Workspace, WorkspaceBuildParameter};
use wsc_utils::term;
use wsc_utils::variables::parse_variables;

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Loading")]
    loading: bool,
    #[tabled(rename = "Disabled")]
    disabled: bool,
}

#[derive(Args)]
#[command(about = "Shows the actions available for a workspace")]
pub struct ActionsCommand {
    #[arg(short = 'f', long = "file", required = true, help = "Path to a json file with the workspace")]
    file: PathBuf,

    #[arg(short = 'u', long = "user", help = "Path to a json file with the current user")]
    user: Option<PathBuf>,

    #[arg(long = "param", help = "Adds a build parameter in the format name=value")]
    parameters: Vec<String>,

    #[arg(long = "can-debug", help = "Allows debugging failed workspaces")]
    can_debug: bool,

    #[arg(long = "owner", help = "Treats the current user as an owner")]
    owner: bool,

    #[arg(long = "can-change-versions", help = "Allows changing the template version of the workspace")]
    can_change_versions: bool,

    #[arg(long = "updating", help = "Marks an update as in progress")]
    updating: bool,

    #[arg(long = "restarting", help = "Marks a restart as in progress")]
    restarting: bool,
}

impl ActionsCommand {
    fn flags(&self, console: &WscConsoleConfig, user: Option<&User>) -> ActionBarFlags {
        let is_owner = self.owner || user.is_some_and(|u| u.has_role(&console.owner_role));
        ActionBarFlags {
            is_updating: self.updating,
            is_restarting: self.restarting,
            can_change_versions: self.can_change_versions || console.can_change_versions,
            can_debug: self.can_debug || console.can_debug,
            is_owner,
        }
    }

    fn build_parameters(&self) -> Result<Vec<WorkspaceBuildParameter>> {
        Ok(parse_variables(&self.parameters)?
            .into_iter()
            .map(|(name, value)| WorkspaceBuildParameter { name, value })
            .collect())
    }

    fn rows(bar: &ActionBar) -> Vec<ActionRow> {
        bar.actions
            .iter()
            .map(|action| ActionRow {
                action: action.to_string(),
                label: action.label(),
                loading: action.is_loading(),
                disabled: bar.is_disabled(*action),
            })
            .collect()
    }

    fn print_bar(workspace: &Workspace, bar: &ActionBar) -> Result<()> {
        term::print_info(&format!(
            "Workspace {}/{} ({})",
            workspace.owner_name, workspace.name, workspace.latest_build.status
        ))?;

        let mut table = Table::new(Self::rows(bar));
        table.with(Style::modern());
        println!("{table}");

        if !bar.tooltip.is_empty() {
            term::print_warning(&bar.tooltip)?;
        }
        if bar.can_cancel {
            println!("The current job can be canceled");
        }
        println!("Favorite: {}", bar.favorite);
        println!("Menu enabled: {}", bar.menu_enabled);
        println!("Change version: {}", bar.show_change_version);
        println!("Build parameters: {}", bar.build_parameters_enabled);
        Ok(())
    }
}

impl WscCommand for ActionsCommand {
    fn exec(self) -> Result<()> {
        let config = WscConfig::load_or_default()?;
        let workspace: Workspace = read_json(&self.file)?;
        let user: Option<User> = self.user.as_deref().map(read_json::<User>).transpose()?;

        let flags = self.flags(&config.console, user.as_ref());
        debug!("resolving actions with {flags:?}");
        let bar = ActionBar::resolve(&workspace, &StatusAbilities, flags);
        Self::print_bar(&workspace, &bar)?;

        let parameters = self.build_parameters()?;
        println!(
            "Duplicate: {}",
            duplicate_workspace_url(&workspace, &parameters)?
        );
        println!("Logs file: {}", build_logs_file_name(&workspace));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wsc_core::actions::ActionType;
    use wsc_models::dtos::{Role, WorkspaceBuild, WorkspaceStatus};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        command: ActionsCommand,
    }

    fn parse(args: &[&str]) -> ActionsCommand {
        let mut argv = vec!["actions", "-f", "workspace.json"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn cli_actions_file_arg_is_required() {
        assert!(TestCli::try_parse_from(["actions"]).is_err());
    }

    #[test]
    fn config_permissions_are_combined_with_flags() {
        let command = parse(&["--updating"]);
        let console = WscConsoleConfig {
            can_debug: true,
            ..Default::default()
        };

        let flags = command.flags(&console, None);
        assert!(flags.is_updating);
        assert!(flags.can_debug);
        assert!(!flags.can_change_versions);
        assert!(!flags.is_owner);
    }

    #[test]
    fn owner_role_marks_user_as_owner() {
        let command = parse(&[]);
        let user = User {
            username: "admin".to_string(),
            roles: vec![Role {
                name: "owner".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let flags = command.flags(&WscConsoleConfig::default(), Some(&user));
        assert!(flags.is_owner);
    }

    #[test]
    fn build_parameters_keep_the_given_order() {
        let command = parse(&["--param", "zone=b", "--param", "cpu=2"]);
        let parameters = command.build_parameters().unwrap();

        assert_eq!(
            parameters,
            vec![
                WorkspaceBuildParameter::new("zone", "b"),
                WorkspaceBuildParameter::new("cpu", "2"),
            ]
        );

        let workspace = Workspace {
            name: "dev".to_string(),
            template_name: "docker".to_string(),
            template_version_id: "v-1".to_string(),
            ..Default::default()
        };
        let url = duplicate_workspace_url(&workspace, &parameters).unwrap();
        assert!(url.ends_with("&param.zone=b&param.cpu=2"));
    }

    #[test]
    fn rows_follow_the_resolved_bar() {
        let workspace = Workspace {
            latest_build: WorkspaceBuild {
                status: WorkspaceStatus::Deleting,
                ..Default::default()
            },
            ..Default::default()
        };
        let bar = ActionBar::resolve(&workspace, &StatusAbilities, ActionBarFlags::default());
        let rows = ActionsCommand::rows(&bar);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].action, ActionType::Deleting.to_string());
        assert_eq!(rows[0].label, "Deleting");
        assert!(rows[0].disabled);
    }
}
