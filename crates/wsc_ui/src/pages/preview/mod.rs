mod actions;
mod duplicate;
mod variables;

pub use actions::*;
pub use duplicate::*;
pub use variables::*;

use crate::components::sidebar::{Sidebar, SidebarItem};
use leptos::*;
use leptos_router::Outlet;

#[component]
pub fn Preview() -> impl IntoView {
    view! {
        <div class="size-full flex">
            <div class="grow-0 flex self-stretch">
                <Sidebar>
                    <SidebarItem icon="iconoir-input-field" text="Template variables" url="/variables"/>
                    <SidebarItem icon="iconoir-play" text="Workspace actions" url="/actions"/>
                </Sidebar>
            </div>
            <div class="grow overflow-auto p-4">
                <Outlet/>
            </div>
        </div>
    }
}
