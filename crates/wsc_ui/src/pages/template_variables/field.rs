use crate::components::{
    badge::{Badge, BadgeMode},
    input::{Input, Select, SelectItem},
};
use leptos::{leptos_dom::logging, *};
use wsc_core::form::{FieldHelpers, TemplateVariablesFormState};
use wsc_models::dtos::{ApiError, TemplateVersionVariable, VariableType};

pub const SENSITIVE_VARIABLE_HELPER_TEXT: &str =
    "This variable is sensitive. The previous value will be used if empty.";

#[component]
pub fn SensitiveVariableHelperText() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-sm text-gray-400">
            <i class="iconoir-lock"></i>
            {SENSITIVE_VARIABLE_HELPER_TEXT}
        </div>
    }
}

fn bool_items() -> Vec<SelectItem> {
    vec![SelectItem::new("true", "True"), SelectItem::new("false", "False")]
}

fn label_text(variable: &TemplateVersionVariable) -> String {
    if variable.required {
        format!("{} *", variable.name)
    } else {
        variable.name.clone()
    }
}

/// Renders the input of a single template variable, picking the control from
/// the variable type.
#[component]
pub fn TemplateVariableField(
    index: usize,
    variable: TemplateVersionVariable,
    form: RwSignal<TemplateVariablesFormState>,
    #[prop(into)] api_error: Signal<Option<ApiError>>,
    #[prop(into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let sensitive = variable.sensitive;
    let helper_text = sensitive.then_some(SENSITIVE_VARIABLE_HELPER_TEXT);
    let field = Signal::derive(move || {
        form.with(|f| api_error.with(|e| f.field(index, e.as_ref(), helper_text)))
            .unwrap_or_default()
    });
    let value = Signal::derive(move || field.with(|f| f.value.clone()));
    let error = Signal::derive(move || field.with(|f| f.error));

    let on_change = Callback::new(move |value: String| {
        form.update(|f| {
            if let Err(e) = f.set_value(index, &value) {
                logging::console_error(&e.to_string());
            }
        })
    });

    let FieldHelpers { id, name, .. } = field.get_untracked();
    let control = match variable.var_type {
        VariableType::Bool => view! {
            <Select
                id=id.clone()
                name=name
                items=bool_items
                value=value
                error=error
                disabled=disabled
                on_change=on_change/>
        }
        .into_view(),
        VariableType::Number => view! {
            <Input
                id=id.clone()
                name=name
                input_type="number".to_string()
                value=value
                error=error
                disabled=disabled
                on_input=on_change/>
        }
        .into_view(),
        VariableType::String => {
            let input_type = if sensitive { "password" } else { "text" };
            view! {
                <Input
                    id=id.clone()
                    name=name
                    input_type=input_type.to_string()
                    value=value
                    error=error
                    disabled=disabled
                    on_input=on_change/>
            }
            .into_view()
        }
    };

    view! {
        <div class="flex flex-col gap-2">
            <div class="flex items-center gap-2">
                <label for=id class="font-semibold">{label_text(&variable)}</label>
                <Show when=move || sensitive fallback=|| view! {}>
                    <Badge mode=BadgeMode::Warning>"Sensitive"</Badge>
                </Show>
            </div>
            {control}
            {move || {
                let FieldHelpers { error, helper_text, .. } = field.get();
                match helper_text {
                    Some(text) if error => view! {
                        <div class="text-sm text-red-400">{text}</div>
                    }
                    .into_view(),
                    Some(_) if sensitive => view! { <SensitiveVariableHelperText/> }.into_view(),
                    Some(text) => view! {
                        <div class="text-sm text-gray-400">{text}</div>
                    }
                    .into_view(),
                    None => ().into_view(),
                }
            }}
        </div>
    }
}
