use leptos::*;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class =
        format!("bg-slate-700 rounded-xl flex flex-col gap-4 border border-slate-600 {class}");
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <div class="text-2xl">{title}</div>
            {subtitle.map(|s| view! { <div class="text-gray-400">{s}</div> })}
        </div>
    }
}
