use leptos::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeMode {
    #[default]
    Info,
    Warning,
}

#[component]
pub fn Badge(
    #[prop(optional)] mode: BadgeMode,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let colors = match mode {
        BadgeMode::Info => "bg-indigo-700 text-indigo-100",
        BadgeMode::Warning => "bg-amber-700 text-amber-100",
    };
    let class = format!("whitespace-nowrap rounded-full px-3 py-1 text-sm w-fit {colors} {class}");
    view! { <div class=class>{children()}</div> }
}
