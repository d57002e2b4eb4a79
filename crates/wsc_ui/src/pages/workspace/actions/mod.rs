mod build_parameters;
mod buttons;
mod download_logs;
mod menu;

pub use build_parameters::*;
pub use buttons::*;
pub use menu::*;

use leptos::*;
use std::rc::Rc;
use wsc_core::actions::{AbilitiesPolicy, ActionBar, ActionBarFlags, ActionType, StatusAbilities};
use wsc_models::dtos::{Workspace, WorkspaceBuildParameter};

type BuildParametersCallback = Callback<Option<Vec<WorkspaceBuildParameter>>>;

#[derive(Copy, Clone)]
struct ActionHandlers {
    on_start: BuildParametersCallback,
    on_stop: Callback<()>,
    on_restart: BuildParametersCallback,
    on_update: Callback<()>,
    on_activate: Callback<()>,
    on_retry: BuildParametersCallback,
    on_debug: BuildParametersCallback,
}

fn action_view(
    action: ActionType,
    bar: &ActionBar,
    handlers: ActionHandlers,
    build_parameters: Signal<Option<Vec<WorkspaceBuildParameter>>>,
) -> View {
    let label = action.label();
    let icon = action_icon(action);
    let disabled = bar.is_disabled(action);
    let tooltip = bar.tooltip_for(action).to_string();

    let with_parameters = |on_click: BuildParametersCallback, enabled: bool| {
        view! {
            <BuildParametersButton
                label=label
                icon=icon
                disabled=disabled
                tooltip=tooltip.clone()
                build_parameters_enabled=enabled
                build_parameters=build_parameters
                on_click=on_click/>
        }
        .into_view()
    };

    match action {
        ActionType::Update | ActionType::UpdateAndStart | ActionType::UpdateAndRestart => {
            view! { <ActionButton label=label icon=icon on_click=handlers.on_update/> }.into_view()
        }
        ActionType::Start => with_parameters(handlers.on_start, true),
        ActionType::Restart => with_parameters(handlers.on_restart, true),
        ActionType::Retry => with_parameters(handlers.on_retry, bar.build_parameters_enabled),
        ActionType::Debug => with_parameters(handlers.on_debug, bar.build_parameters_enabled),
        ActionType::Stop => {
            view! { <ActionButton label=label icon=icon on_click=handlers.on_stop/> }.into_view()
        }
        ActionType::Activate => {
            view! { <ActionButton label=label icon=icon on_click=handlers.on_activate/> }
                .into_view()
        }
        ActionType::Updating
        | ActionType::Starting
        | ActionType::Stopping
        | ActionType::Restarting
        | ActionType::Activating => view! {
            <ActionButton label=label icon=icon loading=true disabled=disabled tooltip=tooltip.clone()/>
        }
        .into_view(),
        ActionType::Deleting | ActionType::Canceling | ActionType::Deleted | ActionType::Pending => {
            view! { <ActionButton label=label icon=icon disabled=true/> }.into_view()
        }
    }
}

/// Renders the lifecycle controls of a workspace. Every control only invokes
/// its callback, the parent performs the actual request.
#[component]
pub fn WorkspaceActions(
    #[prop(into)] workspace: Signal<Workspace>,
    #[prop(into)] on_start: BuildParametersCallback,
    #[prop(into)] on_stop: Callback<()>,
    #[prop(into)] on_restart: BuildParametersCallback,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_update: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_settings: Callback<()>,
    #[prop(into)] on_change_version: Callback<()>,
    #[prop(into)] on_toggle_favorite: Callback<()>,
    #[prop(into)] on_activate: Callback<()>,
    #[prop(into)] on_retry: BuildParametersCallback,
    #[prop(into)] on_debug: BuildParametersCallback,
    #[prop(into)] on_download_logs: Callback<String>,
    #[prop(into, optional)] is_updating: MaybeSignal<bool>,
    #[prop(into, optional)] is_restarting: MaybeSignal<bool>,
    #[prop(into, optional)] can_change_versions: MaybeSignal<bool>,
    #[prop(into, optional)] can_debug: MaybeSignal<bool>,
    #[prop(into, optional)] is_owner: MaybeSignal<bool>,
    #[prop(into, optional)] build_parameters: MaybeSignal<Option<Vec<WorkspaceBuildParameter>>>,
    #[prop(optional)] policy: Option<Rc<dyn AbilitiesPolicy>>,
) -> impl IntoView {
    let policy = store_value(policy.unwrap_or_else(|| Rc::new(StatusAbilities)));
    let build_parameters = Signal::derive(move || build_parameters.get());
    let handlers = ActionHandlers {
        on_start,
        on_stop,
        on_restart,
        on_update,
        on_activate,
        on_retry,
        on_debug,
    };

    let bar = create_memo(move |_| {
        let flags = ActionBarFlags {
            is_updating: is_updating.get(),
            is_restarting: is_restarting.get(),
            can_change_versions: can_change_versions.get(),
            can_debug: can_debug.get(),
            is_owner: is_owner.get(),
        };
        workspace.with(|ws| policy.with_value(|p| ActionBar::resolve(ws, p.as_ref(), flags)))
    });

    view! {
        <div class="flex items-center gap-2">
            {move || bar.with(|bar| {
                bar.actions
                    .iter()
                    .map(|action| action_view(*action, bar, handlers, build_parameters))
                    .collect_view()
            })}
            <Show when=move || bar.with(|b| b.can_cancel) fallback=|| view! {}>
                <CancelButton on_cancel=on_cancel/>
            </Show>
            <FavoriteButton
                favorite=Signal::derive(move || bar.with(|b| b.favorite))
                on_toggle=on_toggle_favorite/>
            <WorkspaceMoreActions
                workspace=workspace
                disabled=Signal::derive(move || bar.with(|b| !b.menu_enabled))
                show_change_version=Signal::derive(move || bar.with(|b| b.show_change_version))
                build_parameters=build_parameters
                on_settings=on_settings
                on_change_version=on_change_version
                on_delete=on_delete
                on_download_logs=on_download_logs/>
        </div>
    }
}
