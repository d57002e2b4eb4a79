use leptos::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    #[default]
    Default,
    Danger,
    Outline,
}

fn get_mode_classes(mode: ButtonMode) -> &'static str {
    match mode {
        ButtonMode::Default => "bg-indigo-600 hover:bg-indigo-700 focus:bg-indigo-700",
        ButtonMode::Danger => "bg-red-600 hover:bg-red-700 focus:bg-red-700",
        ButtonMode::Outline => "border border-slate-500 hover:bg-slate-600 focus:bg-slate-600",
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="size-4 animate-spin rounded-full border-2 border-slate-300 border-t-transparent"></div>
    }
}

/// A button that can show a spinner and be disabled while a job is in flight.
/// A loading button is always disabled.
#[component]
pub fn Button(
    #[prop(optional)] mode: ButtonMode,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] button_type: Option<String>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, optional)] loading: MaybeSignal<bool>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let mode = get_mode_classes(mode);
    let class = format!(
        "h-[40px] flex-none flex items-center justify-center gap-2 rounded-lg px-4 py-2 focus:outline-none disabled:opacity-50 disabled:cursor-not-allowed {mode} {class}"
    );
    let button_type = button_type.unwrap_or_else(|| "button".to_string());
    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }>
            <Show when=move || loading.get() fallback=|| view! {}>
                <Spinner/>
            </Show>
            {children()}
        </button>
    }
}

#[component]
pub fn IconButton(
    #[prop(optional)] mode: ButtonMode,
    #[prop(into, optional)] class: String,
    #[prop(into)] icon: MaybeSignal<String>,
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let mode = get_mode_classes(mode);
    let class = format!(
        "h-[40px] w-[40px] flex-none text-xl rounded-lg p-2 focus:outline-none disabled:opacity-50 {mode} {class}"
    );
    view! {
        <button
            type="button"
            class=class
            title=title
            disabled=move || disabled.get()
            on:click=move |_| on_click.call(())>
            <i class=move || icon.get()/>
        </button>
    }
}
