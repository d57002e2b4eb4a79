use crate::components::{button::Button, input::Input};
use leptos::*;
use wsc_models::dtos::WorkspaceBuildParameter;

/// Lets the user review and edit the build parameters before confirming a
/// lifecycle action. The popover works on a copy taken when it opens.
#[component]
pub fn BuildParametersPopover(
    #[prop(into)] build_parameters: Signal<Option<Vec<WorkspaceBuildParameter>>>,
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_confirm: Callback<Vec<WorkspaceBuildParameter>>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let values = create_rw_signal(Vec::<WorkspaceBuildParameter>::new());

    let toggle = move |_| {
        if !open.get_untracked() {
            values.set(build_parameters.get_untracked().unwrap_or_default());
        }
        open.update(|o| *o = !*o);
    };

    let confirm = Callback::new(move |_| {
        open.set(false);
        on_confirm.call(values.get_untracked());
    });

    view! {
        <div class="relative">
            <button
                type="button"
                class="h-[40px] w-[32px] flex-none rounded-lg border border-slate-500 hover:bg-slate-600 disabled:opacity-50"
                title="Build parameters"
                disabled=move || disabled || build_parameters.with(Option::is_none)
                on:click=toggle>
                <i class="iconoir-nav-arrow-down"/>
            </button>
            <Show when=move || open.get() fallback=|| view! {}>
                <div class="absolute right-0 z-20 mt-2 w-80 flex flex-col gap-4 rounded-lg border border-slate-600 bg-slate-800 p-4 shadow-lg">
                    <div class="font-semibold">"Build parameters"</div>
                    <Show when=move || values.with(Vec::is_empty) fallback=|| view! {}>
                        <div class="text-gray-400">"This template has no build parameters."</div>
                    </Show>
                    {values
                        .get_untracked()
                        .into_iter()
                        .enumerate()
                        .map(|(i, parameter)| {
                            let id = format!("build_parameter_{i}");
                            let value = Signal::derive(move || {
                                values.with(|v| v.get(i).map(|p| p.value.clone()).unwrap_or_default())
                            });
                            let on_input = Callback::new(move |value: String| {
                                values.update(|v| {
                                    if let Some(p) = v.get_mut(i) {
                                        p.value = value;
                                    }
                                })
                            });
                            view! {
                                <div class="flex flex-col gap-1">
                                    <label for=id.clone() class="text-sm">{parameter.name}</label>
                                    <Input id=id value=value on_input=on_input/>
                                </div>
                            }
                        })
                        .collect_view()}
                    <Button on_click=confirm>"Confirm"</Button>
                </div>
            </Show>
        </div>
    }
}
