use leptos::*;
use leptos_router::A;

#[component]
pub fn SidebarTop() -> impl IntoView {
    view! {
        <div class="bg-slate-800 p-8 text-2xl text-center">
            "Workspace console"
        </div>
    }
}

#[component]
pub fn SidebarItem(
    #[prop(into)] icon: String,
    #[prop(into)] text: String,
    #[prop(into)] url: String,
) -> impl IntoView {
    view! {
        <A class="py-4 px-8 hover:bg-slate-600 hover:cursor-pointer flex items-center" href=url>
            <div class="text-2xl text-indigo-500">
                <i class=icon></i>
            </div>
            <div class="ml-4">{text}</div>
        </A>
    }
}

#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    view! {
        <div class="bg-slate-700 w-64 shadow-md flex flex-col divide-y divide-slate-600">
            <SidebarTop/>
            <div class="grow flex flex-col divide-y divide-slate-600">{children()}</div>
        </div>
    }
}
