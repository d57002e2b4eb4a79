use super::build_parameters::BuildParametersPopover;
use crate::components::{
    button::{Button, ButtonMode, IconButton},
    tooltip::Tooltip,
};
use leptos::*;
use wsc_core::actions::ActionType;
use wsc_models::dtos::WorkspaceBuildParameter;

pub fn action_icon(action: ActionType) -> &'static str {
    match action {
        ActionType::Update | ActionType::UpdateAndStart | ActionType::UpdateAndRestart => {
            "iconoir-cloud-upload"
        }
        ActionType::Updating => "iconoir-cloud-sync",
        ActionType::Start | ActionType::Starting => "iconoir-play",
        ActionType::Stop | ActionType::Stopping => "iconoir-pause",
        ActionType::Restart | ActionType::Restarting => "iconoir-refresh-double",
        ActionType::Deleting | ActionType::Deleted => "iconoir-bin",
        ActionType::Canceling => "iconoir-xmark",
        ActionType::Pending => "iconoir-clock",
        ActionType::Activate | ActionType::Activating => "iconoir-power-button",
        ActionType::Retry => "iconoir-redo",
        ActionType::Debug => "iconoir-bug",
    }
}

#[component]
pub fn ActionButton(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(optional)] loading: bool,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] tooltip: String,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let on_click = on_click.unwrap_or_else(|| Callback::new(|_| ()));
    view! {
        <Tooltip text=tooltip>
            <Button mode=ButtonMode::Outline loading=loading disabled=disabled on_click=on_click>
                <i class=icon/>
                {label}
            </Button>
        </Tooltip>
    }
}

/// A lifecycle control that can also be confirmed with build parameters. A
/// plain click passes `None` to `on_click`.
#[component]
pub fn BuildParametersButton(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] tooltip: String,
    #[prop(optional)] build_parameters_enabled: bool,
    #[prop(into)] build_parameters: Signal<Option<Vec<WorkspaceBuildParameter>>>,
    #[prop(into)] on_click: Callback<Option<Vec<WorkspaceBuildParameter>>>,
) -> impl IntoView {
    view! {
        <Tooltip text=tooltip>
            <div class="flex items-center gap-1">
                <Button
                    mode=ButtonMode::Outline
                    disabled=disabled
                    on_click=Callback::new(move |_| on_click.call(None))>
                    <i class=icon/>
                    {label}
                </Button>
                {build_parameters_enabled.then(|| view! {
                    <BuildParametersPopover
                        disabled=disabled
                        build_parameters=build_parameters
                        on_confirm=Callback::new(move |params| on_click.call(Some(params)))/>
                })}
            </div>
        </Tooltip>
    }
}

#[component]
pub fn FavoriteButton(
    #[prop(into)] favorite: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let icon = Signal::derive(move || {
        if favorite.get() {
            "iconoir-star-solid".to_string()
        } else {
            "iconoir-star".to_string()
        }
    });
    view! {
        <IconButton
            mode=ButtonMode::Outline
            icon=icon
            title="Favorite"
            on_click=on_toggle/>
    }
}

#[component]
pub fn CancelButton(#[prop(into)] on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <IconButton
            mode=ButtonMode::Danger
            icon="iconoir-xmark".to_string()
            title="Cancel"
            on_click=on_cancel/>
    }
}
