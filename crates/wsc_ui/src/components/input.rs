use leptos::*;

const INPUT_CLASSES: &str =
    "border bg-slate-600 rounded p-2 min-h-[45px] w-full disabled:opacity-50";

fn border_classes(error: bool) -> &'static str {
    if error {
        "border-red-500"
    } else {
        "border-slate-800"
    }
}

#[component]
pub fn Input(
    #[prop(into)] id: String,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into, optional)] input_type: Option<String>,
    #[prop(optional)] placeholder: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] error: MaybeSignal<bool>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            id=id
            name=name
            type=input_type
            class=move || format!("{INPUT_CLASSES} {}", border_classes(error.get()))
            placeholder=placeholder
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev)) />
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
}

impl SelectItem {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[component]
pub fn Select(
    #[prop(into)] id: String,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into)] items: Signal<Vec<SelectItem>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] error: MaybeSignal<bool>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            name=name
            class=move || format!("{INPUT_CLASSES} {}", border_classes(error.get()))
            disabled=move || disabled.get()
            on:change=move |ev| on_change.call(event_target_value(&ev))>
            <For
                each=move || items.get()
                key=|state| state.value.clone()
                children=move |child: SelectItem| {
                    let option_value = child.value.clone();
                    view! {
                        <option
                            value=child.value
                            selected=move || value.with(|v| *v == option_value)>
                            {child.label}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2">
            <input
                type="checkbox"
                class="size-4 accent-indigo-600"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))/>
            {label}
        </label>
    }
}
