use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroupItem {
    pub id: String,
    pub label: String,
}

impl ButtonGroupItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

fn item_classes(selected: bool) -> &'static str {
    if selected {
        "inline-block rounded-md px-4 py-2 text-sm text-gray-200 shadow-sm focus:relative bg-slate-800"
    } else {
        "inline-block rounded-md px-4 py-2 text-sm text-gray-400 hover:text-gray-200 focus:relative"
    }
}

/// A segmented control where exactly one item is selected.
#[component]
pub fn ButtonGroup(
    #[prop(into)] items: Signal<Vec<ButtonGroupItem>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="inline-flex flex-wrap rounded-lg border border-gray-800 p-1 bg-slate-900">
            {move || items
                .get()
                .into_iter()
                .map(|x| {
                    let id = x.id.clone();
                    view! {
                        <button
                            type="button"
                            class=item_classes(selected.with(|s| *s == x.id))
                            on:click=move |_| on_select.call(id.clone())>
                            {x.label}
                        </button>
                    }
                })
                .collect_view()
            }
        </div>
    }
}
