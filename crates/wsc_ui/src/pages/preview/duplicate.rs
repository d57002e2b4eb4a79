use crate::components::card::{Card, CardHeader};
use leptos::*;
use leptos_router::*;

/// Lists what a duplicated workspace would be created with.
#[component]
pub fn DuplicateWorkspace() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let template = move || params.with(|p| p.get("template").cloned().unwrap_or_default());
    let entries = move || {
        query.with(|q| {
            let mut entries: Vec<(String, String)> =
                q.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            entries.sort();
            entries
        })
    };

    view! {
        <Card class="px-8 py-12">
            <CardHeader title="Create workspace" subtitle="Duplicated from an existing workspace".to_string()/>
            <div>"Template: " {template}</div>
            <div class="grid grid-cols-3 gap-2">
                <For each=entries key=|(k, _)| k.clone() let:entry>
                    <div class="text-gray-400">{entry.0}</div>
                    <div class="col-span-2">{entry.1}</div>
                </For>
            </div>
        </Card>
    }
}
