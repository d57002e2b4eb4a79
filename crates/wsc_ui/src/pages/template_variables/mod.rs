mod field;

pub use field::*;

use crate::{
    components::form::{FormFields, FormFooter, FormSection, HorizontalForm},
    error::FormAlert,
};
use leptos::{leptos_dom::logging, *};
use wsc_core::form::TemplateVariablesFormState;
use wsc_models::dtos::{
    ApiError, CreateTemplateVersionRequest, TemplateVersion, TemplateVersionVariable,
};

const SUBMIT_LABEL: &str = "Save";

/// Every variable gets its own form section titled by its name.
fn section_heading(variable: &TemplateVersionVariable) -> (String, String) {
    (variable.name.clone(), variable.description.clone())
}

/// Edits the variable values of a template version. Submitting hands the
/// assembled request to `on_submit`, sending it is up to the parent.
#[component]
pub fn TemplateVariablesForm(
    #[prop(into)] template_version: TemplateVersion,
    #[prop(into)] template_variables: Vec<TemplateVersionVariable>,
    #[prop(into)] on_submit: Callback<CreateTemplateVersionRequest>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into, optional)] is_submitting: MaybeSignal<bool>,
    #[prop(into, optional)] error: MaybeSignal<Option<ApiError>>,
    #[prop(optional)] initial_touched: Vec<usize>,
) -> impl IntoView {
    let form = create_rw_signal(
        TemplateVariablesFormState::new(&template_version, &template_variables)
            .with_initial_touched(&initial_touched),
    );
    let api_error = Signal::derive(move || error.get());
    let form_error = Signal::derive(move || {
        form.with(|f| api_error.with(|e| f.form_error(e.as_ref())))
    });

    let submit = Callback::new(move |_: ev::SubmitEvent| {
        match form.try_update(|f| f.submit()) {
            Some(Ok(request)) => on_submit.call(request),
            Some(Err(e)) => logging::console_log(&e.to_string()),
            None => logging::console_error("template variables form is no longer available"),
        }
    });

    let fields = template_variables
        .into_iter()
        .enumerate()
        .map(|(index, variable)| {
            let (title, description) = section_heading(&variable);
            view! {
                <FormSection title=title description=description>
                    <FormFields>
                        <TemplateVariableField
                            index=index
                            variable=variable
                            form=form
                            api_error=api_error
                            disabled=is_submitting/>
                    </FormFields>
                </FormSection>
            }
        })
        .collect_view();

    view! {
        <HorizontalForm on_submit=submit>
            <Show when=move || form_error.with(Option::is_some) fallback=|| view! {}>
                <FormAlert error=move || form_error.get().unwrap_or_default()/>
            </Show>
            {fields}
            <FormFooter on_cancel=on_cancel is_loading=is_submitting submit_label=SUBMIT_LABEL.to_string()/>
        </HorizontalForm>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn each_variable_has_its_own_section() {
        let variables = fixtures::template_variables();
        let headings: Vec<(String, String)> = variables.iter().map(section_heading).collect();

        assert_eq!(headings.len(), variables.len());
        for (variable, (title, description)) in variables.iter().zip(headings) {
            assert_eq!(title, variable.name);
            assert_eq!(description, variable.description);
        }
    }

    #[test]
    fn submit_button_saves() {
        assert_eq!(SUBMIT_LABEL, "Save");
    }
}
