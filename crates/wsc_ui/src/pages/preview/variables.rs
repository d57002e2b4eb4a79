use crate::{
    components::{
        button::{Button, ButtonMode},
        card::{Card, CardHeader},
    },
    fixtures,
    pages::template_variables::TemplateVariablesForm,
};
use leptos::{leptos_dom::logging, *};
use wsc_core::form::field_path;
use wsc_models::dtos::{ApiError, CreateTemplateVersionRequest, ValidationError};

fn region_validation_error() -> ApiError {
    ApiError {
        message: "Validation failed".to_string(),
        detail: None,
        validations: vec![ValidationError {
            field: field_path(0),
            detail: "Region is not available for this organization.".to_string(),
        }],
    }
}

fn unrelated_error() -> ApiError {
    ApiError {
        message: "Unable to create the template version".to_string(),
        detail: Some("provisioner daemon is offline".to_string()),
        validations: vec![],
    }
}

#[component]
pub fn TemplateVariablesPreview() -> impl IntoView {
    let is_submitting = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);

    let on_submit = Callback::new(move |request: CreateTemplateVersionRequest| {
        match serde_json::to_string_pretty(&request) {
            Ok(json) => logging::console_log(&json),
            Err(e) => logging::console_error(&e.to_string()),
        }
        error.set(None);
    });
    let on_cancel = Callback::new(|_| logging::console_log("template variables form canceled"));

    view! {
        <Card class="px-8 py-12">
            <CardHeader
                title="Template variables"
                subtitle=fixtures::template_version().name/>
            <div class="flex gap-4">
                <Button
                    mode=ButtonMode::Outline
                    on_click=Callback::new(move |_| is_submitting.update(|s| *s = !*s))>
                    "Toggle submitting"
                </Button>
                <Button
                    mode=ButtonMode::Outline
                    on_click=Callback::new(move |_| error.set(Some(region_validation_error())))>
                    "Field error"
                </Button>
                <Button
                    mode=ButtonMode::Outline
                    on_click=Callback::new(move |_| error.set(Some(unrelated_error())))>
                    "Form error"
                </Button>
            </div>
            <TemplateVariablesForm
                template_version=fixtures::template_version()
                template_variables=fixtures::template_variables()
                on_submit=on_submit
                on_cancel=on_cancel
                is_submitting=is_submitting
                error=error
                initial_touched=vec![4]/>
        </Card>
    }
}
