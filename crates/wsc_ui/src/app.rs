use crate::{
    context::{AppDialog, AppDialogContent},
    pages::{
        not_found::NotFound,
        preview::{DuplicateWorkspace, Preview, TemplateVariablesPreview, WorkspaceActionsPreview},
    },
};
use leptos::{html::Dialog, *};
use leptos_router::{Route, Router, Routes};

#[component]
pub fn App() -> impl IntoView {
    let app_dialog = create_node_ref::<Dialog>();
    let app_dialog_content: RwSignal<Option<View>> = create_rw_signal(None);

    provide_context(AppDialog(app_dialog));
    provide_context(AppDialogContent(app_dialog_content));

    view! {
        <dialog _ref=app_dialog class="w-full h-full bg-transparent">
            <div class="h-full grid place-items-center">{move || app_dialog_content.get()}</div>
        </dialog>
        <Router>
            <div class="h-screen bg-slate-900 text-gray-200">
                <div class="h-screen flex bg-grid">
                    <Routes>
                        <Route path="/" view=Preview>
                            <Route path="/" view=TemplateVariablesPreview/>
                            <Route path="/variables" view=TemplateVariablesPreview/>
                            <Route path="/actions" view=WorkspaceActionsPreview/>
                            <Route path="/templates/:template/workspace" view=DuplicateWorkspace/>
                        </Route>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}
