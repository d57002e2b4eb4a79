use crate::{
    components::{
        button::{Button, ButtonMode},
        card::{Card, CardHeader},
    },
    context::AppDialogHandle,
};
use leptos::*;

#[component]
pub fn DownloadLogsDialog(
    #[prop(into)] file_name: String,
    dialog: AppDialogHandle,
    #[prop(into)] on_download: Callback<String>,
) -> impl IntoView {
    let download_name = file_name.clone();
    let download = Callback::new(move |_| {
        on_download.call(download_name.clone());
        dialog.close();
    });
    view! {
        <Card class="flex flex-col gap-6 px-8 py-12 w-[500px]">
            <CardHeader
                title="Download logs"
                subtitle="The logs of the latest build will be saved as".to_string()/>
            <div class="rounded-lg bg-slate-800 p-2 font-mono break-all">{file_name}</div>
            <div class="flex gap-x-4">
                <Button on_click=download>"Download"</Button>
                <Button mode=ButtonMode::Outline on_click=Callback::new(move |_| dialog.close())>
                    "Cancel"
                </Button>
            </div>
        </Card>
    }
}
