use leptos::*;

/// Shows `text` above the wrapped content on hover. An empty text renders the
/// content alone.
#[component]
pub fn Tooltip(#[prop(into)] text: MaybeSignal<String>, children: Children) -> impl IntoView {
    let text = Signal::derive(move || text.get());
    view! {
        <div class="relative group">
            {children()}
            <Show when=move || !text.with(String::is_empty) fallback=|| view! {}>
                <div class="absolute bottom-full left-1/2 z-10 mb-2 hidden w-64 -translate-x-1/2 rounded-lg bg-slate-900 p-2 text-sm text-gray-200 shadow-lg group-hover:block">
                    {move || text.get()}
                </div>
            </Show>
        </div>
    }
}
