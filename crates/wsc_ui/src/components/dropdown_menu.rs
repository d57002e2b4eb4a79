use leptos::*;

#[derive(Copy, Clone)]
struct DropdownMenuOpen(RwSignal<bool>);

/// An icon button that toggles a floating list of [`DropdownMenuItem`]s.
#[component]
pub fn DropdownMenu(
    #[prop(into)] icon: String,
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = create_rw_signal(false);
    provide_context(DropdownMenuOpen(open));

    create_effect(move |_| {
        if disabled.get() {
            open.set(false);
        }
    });

    view! {
        <div class="relative">
            <button
                type="button"
                class="h-[40px] w-[40px] flex-none text-xl rounded-lg p-2 border border-slate-500 hover:bg-slate-600 disabled:opacity-50"
                title=title
                disabled=move || disabled.get()
                on:click=move |_| open.update(|o| *o = !*o)>
                <i class=icon/>
            </button>
            <Show when=move || open.get() fallback=|| view! {}>
                <div class="absolute right-0 z-20 mt-2 w-56 flex flex-col rounded-lg border border-slate-600 bg-slate-800 py-1 shadow-lg">
                    {children()}
                </div>
            </Show>
        </div>
    }
}

/// Closes the parent menu and invokes `on_click`.
#[component]
pub fn DropdownMenuItem(
    #[prop(into)] icon: String,
    #[prop(into, optional)] danger: bool,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let open = use_context::<DropdownMenuOpen>();
    let color = if danger { "text-red-400" } else { "text-gray-200" };
    let class = format!(
        "flex items-center gap-3 px-4 py-2 text-left hover:bg-slate-700 disabled:opacity-50 disabled:cursor-not-allowed {color}"
    );
    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(DropdownMenuOpen(open)) = open {
                    open.set(false);
                }
                on_click.call(());
            }>
            <i class=icon/>
            {children()}
        </button>
    }
}

#[component]
pub fn DropdownMenuSeparator() -> impl IntoView {
    view! { <div class="my-1 border-t border-slate-600"></div> }
}
