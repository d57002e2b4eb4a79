use leptos::{html::Dialog, leptos_dom::logging, *};

#[derive(Copy, Clone)]
pub struct AppDialog(pub NodeRef<Dialog>);

#[derive(Copy, Clone)]
pub struct AppDialogContent(pub RwSignal<Option<View>>);

/// Opens and closes the app dialog. Has to be created while a component is
/// being built, the contexts are not reachable from event handlers.
#[derive(Copy, Clone)]
pub struct AppDialogHandle {
    dialog: NodeRef<Dialog>,
    content: RwSignal<Option<View>>,
}

impl AppDialogHandle {
    pub fn from_context() -> Option<Self> {
        let Some(AppDialog(dialog)) = use_context::<AppDialog>() else {
            logging::console_error("App dialog context not found");
            return None;
        };
        let Some(AppDialogContent(content)) = use_context::<AppDialogContent>() else {
            logging::console_error("App dialog content context not found");
            return None;
        };
        Some(Self { dialog, content })
    }

    pub fn show(&self, view: View) {
        self.content.set(Some(view));
        let _ = self.dialog.get().map(|x| x.show_modal());
    }

    pub fn close(&self) {
        let _ = self.dialog.get().map(|x| x.close());
        self.content.set(None);
    }
}
