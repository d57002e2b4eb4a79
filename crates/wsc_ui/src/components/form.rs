use crate::components::button::{Button, ButtonMode};
use leptos::*;

/// Lays out form sections with their description on the left.
#[component]
pub fn HorizontalForm(
    #[prop(into)] on_submit: Callback<ev::SubmitEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <form
            class="flex flex-col gap-8"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(ev);
            }>
            {children()}
        </form>
    }
}

#[component]
pub fn FormSection(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="grid grid-cols-3 gap-8">
            <div class="flex flex-col gap-2">
                <div class="text-xl">{title}</div>
                {description
                    .filter(|d| !d.is_empty())
                    .map(|d| view! { <div class="text-gray-400">{d}</div> })}
            </div>
            <div class="col-span-2">{children()}</div>
        </section>
    }
}

#[component]
pub fn FormFields(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col gap-6">{children()}</div> }
}

#[component]
pub fn FormFooter(
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into, optional)] is_loading: MaybeSignal<bool>,
    #[prop(into, optional)] submit_label: Option<String>,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Submit".to_string());
    view! {
        <div class="flex justify-end gap-4 border-t border-slate-600 pt-6">
            <Button mode=ButtonMode::Outline on_click=on_cancel disabled=is_loading>
                "Cancel"
            </Button>
            <Button button_type="submit" loading=is_loading>
                {submit_label}
            </Button>
        </div>
    }
}
