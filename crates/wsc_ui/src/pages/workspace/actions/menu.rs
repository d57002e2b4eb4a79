use super::download_logs::DownloadLogsDialog;
use crate::{
    components::dropdown_menu::{DropdownMenu, DropdownMenuItem, DropdownMenuSeparator},
    context::AppDialogHandle,
};
use leptos::{leptos_dom::logging, *};
use leptos_router::{NavigateOptions, use_navigate};
use wsc_core::{duplication::duplicate_workspace_url, logs::build_logs_file_name};
use wsc_models::dtos::{Workspace, WorkspaceBuildParameter};

#[component]
pub fn WorkspaceMoreActions(
    #[prop(into)] workspace: Signal<Workspace>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] show_change_version: Signal<bool>,
    #[prop(into)] build_parameters: Signal<Option<Vec<WorkspaceBuildParameter>>>,
    #[prop(into)] on_settings: Callback<()>,
    #[prop(into)] on_change_version: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_download_logs: Callback<String>,
) -> impl IntoView {
    let navigate = use_navigate();
    let dialog = AppDialogHandle::from_context();

    let duplicate = Callback::new(move |_| {
        let url = workspace.with(|ws| {
            build_parameters.with(|params| {
                duplicate_workspace_url(ws, params.as_deref().unwrap_or_default())
            })
        });
        match url {
            Ok(url) => navigate(&url, NavigateOptions::default()),
            Err(e) => logging::console_error(&e.to_string()),
        }
    });

    let download_logs = Callback::new(move |_| {
        let Some(dialog) = dialog else {
            return;
        };
        let file_name = workspace.with(build_logs_file_name);
        dialog.show(
            view! {
                <DownloadLogsDialog
                    file_name=file_name
                    dialog=dialog
                    on_download=on_download_logs/>
            }
            .into_view(),
        );
    });

    let duplicate_disabled = Signal::derive(move || build_parameters.with(Option::is_none));

    view! {
        <DropdownMenu icon="iconoir-more-vert" title="More options" disabled=disabled>
            <DropdownMenuItem icon="iconoir-settings" on_click=on_settings>
                "Settings"
            </DropdownMenuItem>
            <Show when=move || show_change_version.get() fallback=|| view! {}>
                <DropdownMenuItem icon="iconoir-git-fork" on_click=on_change_version>
                    "Change version..."
                </DropdownMenuItem>
            </Show>
            <DropdownMenuItem
                icon="iconoir-copy"
                disabled=duplicate_disabled
                on_click=duplicate>
                "Duplicate..."
            </DropdownMenuItem>
            <DropdownMenuItem icon="iconoir-download" on_click=download_logs>
                "Download logs..."
            </DropdownMenuItem>
            <DropdownMenuSeparator/>
            <DropdownMenuItem icon="iconoir-bin" danger=true on_click=on_delete>
                "Delete..."
            </DropdownMenuItem>
        </DropdownMenu>
    }
}
