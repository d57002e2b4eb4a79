use crate::{
    components::{
        button_group::{ButtonGroup, ButtonGroupItem},
        card::{Card, CardHeader},
        input::Checkbox,
    },
    fixtures,
    pages::workspace::WorkspaceActions,
};
use codee::string::FromToStringCodec;
use leptos::{leptos_dom::logging, *};
use leptos_use::storage::use_local_storage;
use wsc_models::dtos::{AutomaticUpdates, WorkspaceBuildParameter, WorkspaceStatus};

fn status_items() -> Vec<ButtonGroupItem> {
    fixtures::STATUSES
        .iter()
        .map(|s| {
            let name = s.to_string();
            ButtonGroupItem::new(&name, &name)
        })
        .collect()
}

fn log_action(action: &'static str) -> Callback<()> {
    Callback::new(move |_| logging::console_log(action))
}

fn log_parameters(action: &'static str) -> Callback<Option<Vec<WorkspaceBuildParameter>>> {
    Callback::new(move |params: Option<Vec<WorkspaceBuildParameter>>| {
        let params = params
            .map(|p| {
                p.iter()
                    .map(|p| format!("{}={}", p.name, p.value))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "none".to_string());
        logging::console_log(&format!("{action} with build parameters: {params}"));
    })
}

#[component]
pub fn WorkspaceActionsPreview() -> impl IntoView {
    let (status, set_status, _) =
        use_local_storage::<String, FromToStringCodec>("wsc_preview_status");
    let outdated = create_rw_signal(false);
    let automatic_updates = create_rw_signal(false);
    let require_active_version = create_rw_signal(false);
    let dormant = create_rw_signal(false);
    let favorite = create_rw_signal(false);
    let is_updating = create_rw_signal(false);
    let is_restarting = create_rw_signal(false);
    let can_change_versions = create_rw_signal(false);
    let can_debug = create_rw_signal(false);
    let is_owner = create_rw_signal(false);
    let parameters_loaded = create_rw_signal(true);

    let selected = Signal::derive(move || {
        let name = status.get();
        if fixtures::status_from_name(&name).is_some() {
            name
        } else {
            WorkspaceStatus::Running.to_string()
        }
    });

    let workspace = Signal::derive(move || {
        let status = fixtures::status_from_name(&selected.get()).unwrap_or(WorkspaceStatus::Running);
        let mut workspace = fixtures::workspace(status);
        workspace.outdated = outdated.get();
        workspace.automatic_updates = if automatic_updates.get() {
            AutomaticUpdates::Always
        } else {
            AutomaticUpdates::Never
        };
        workspace.template_require_active_version = require_active_version.get();
        workspace.dormant_at = dormant.get().then(|| "2024-05-01T00:00:00Z".to_string());
        workspace.favorite = favorite.get();
        workspace
    });

    let build_parameters =
        Signal::derive(move || parameters_loaded.get().then(fixtures::build_parameters));

    view! {
        <Card class="px-8 py-12">
            <CardHeader title="Workspace actions" subtitle="admin/dev".to_string()/>
            <ButtonGroup
                items=status_items
                selected=selected
                on_select=Callback::new(move |name: String| set_status.set(name))/>
            <div class="grid grid-cols-4 gap-2">
                <Checkbox label="Outdated" checked=outdated/>
                <Checkbox label="Automatic updates" checked=automatic_updates/>
                <Checkbox label="Require active version" checked=require_active_version/>
                <Checkbox label="Dormant" checked=dormant/>
                <Checkbox label="Updating" checked=is_updating/>
                <Checkbox label="Restarting" checked=is_restarting/>
                <Checkbox label="Can change versions" checked=can_change_versions/>
                <Checkbox label="Can debug" checked=can_debug/>
                <Checkbox label="Owner" checked=is_owner/>
                <Checkbox label="Build parameters loaded" checked=parameters_loaded/>
            </div>
            <div class="border-t border-slate-600 pt-6">
                <WorkspaceActions
                    workspace=workspace
                    on_start=log_parameters("start")
                    on_stop=log_action("stop")
                    on_restart=log_parameters("restart")
                    on_delete=log_action("delete")
                    on_update=log_action("update")
                    on_cancel=log_action("cancel")
                    on_settings=log_action("settings")
                    on_change_version=log_action("change version")
                    on_toggle_favorite=Callback::new(move |_| favorite.update(|f| *f = !*f))
                    on_activate=log_action("activate")
                    on_retry=log_parameters("retry")
                    on_debug=log_parameters("debug")
                    on_download_logs=Callback::new(|file_name: String| {
                        logging::console_log(&format!("download logs as {file_name}"))
                    })
                    is_updating=is_updating
                    is_restarting=is_restarting
                    can_change_versions=can_change_versions
                    can_debug=can_debug
                    is_owner=is_owner
                    build_parameters=build_parameters/>
            </div>
        </Card>
    }
}
