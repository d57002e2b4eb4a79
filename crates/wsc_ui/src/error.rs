use leptos::*;

/// An alert for errors that cannot be shown next to a single field.
#[component]
pub fn FormAlert(#[prop(into)] error: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex items-center rounded-lg bg-red-500 p-2 gap-4" role="alert">
            <div class="text-2xl">
                <i class="iconoir-warning-circle"></i>
            </div>
            <div class="text-gray-100">{move || error.get()}</div>
        </div>
    }
}
