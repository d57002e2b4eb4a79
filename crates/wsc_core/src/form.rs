use crate::variables::{
    select_initial_user_variable_values, validate_user_variable_value,
    validate_user_variable_values,
};
use thiserror::Error;
use tracing::debug;
use wsc_models::dtos::{
    ApiError, CreateTemplateVersionRequest, ProvisionerStorageMethod, ProvisionerType,
    TemplateVersion, TemplateVersionVariable, VariableValue,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub index: usize,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no template variable at index {0}")]
    UnknownField(usize),
    #[error("{} template variable(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Everything an input needs to render one variable value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldHelpers {
    pub id: String,
    pub name: String,
    pub value: String,
    pub error: bool,
    pub helper_text: Option<String>,
}

/// The path of a variable value inside [`CreateTemplateVersionRequest`], also
/// the field name the backend uses in its validation errors.
pub fn field_path(index: usize) -> String {
    format!("user_variable_values[{index}].value")
}

/// Edits the variable values of a new template version. The form only
/// assembles the request, sending it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariablesFormState {
    variables: Vec<TemplateVersionVariable>,
    initial_values: Vec<VariableValue>,
    request: CreateTemplateVersionRequest,
    touched: Vec<bool>,
}

impl TemplateVariablesFormState {
    pub fn new(version: &TemplateVersion, variables: &[TemplateVersionVariable]) -> Self {
        let initial_values = select_initial_user_variable_values(variables);
        let request = CreateTemplateVersionRequest {
            template_id: version.template_id.clone(),
            provisioner: ProvisionerType::Terraform,
            storage_method: ProvisionerStorageMethod::File,
            tags: version.job.tags.clone(),
            file_id: version.job.file_id.clone(),
            user_variable_values: initial_values.clone(),
        };
        Self {
            variables: variables.to_vec(),
            touched: vec![false; initial_values.len()],
            initial_values,
            request,
        }
    }

    /// Marks the given fields as touched up front so their errors are shown
    /// before any interaction.
    pub fn with_initial_touched(mut self, indexes: &[usize]) -> Self {
        for i in indexes {
            self.touch(*i);
        }
        self
    }

    pub fn variables(&self) -> &[TemplateVersionVariable] {
        &self.variables
    }

    pub fn initial_values(&self) -> &[VariableValue] {
        &self.initial_values
    }

    pub fn values(&self) -> &[VariableValue] {
        &self.request.user_variable_values
    }

    pub fn request(&self) -> &CreateTemplateVersionRequest {
        &self.request
    }

    pub fn set_value(&mut self, index: usize, value: &str) -> Result<(), FormError> {
        let variable = self
            .variables
            .get(index)
            .ok_or(FormError::UnknownField(index))?;
        let slot = self
            .request
            .user_variable_values
            .get_mut(index)
            .ok_or(FormError::UnknownField(index))?;
        *slot = VariableValue::new(&variable.name, value);
        self.touch(index);
        Ok(())
    }

    pub fn touch(&mut self, index: usize) {
        if let Some(touched) = self.touched.get_mut(index) {
            *touched = true;
        }
    }

    pub fn is_touched(&self, index: usize) -> bool {
        self.touched.get(index).copied().unwrap_or(false)
    }

    pub fn field_error(&self, index: usize) -> Option<&'static str> {
        let value = self.request.user_variable_values.get(index)?;
        validate_user_variable_value(value, &self.variables)
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let values = &self.request.user_variable_values;
        validate_user_variable_values(values, &self.variables)
            .into_iter()
            .zip(values)
            .enumerate()
            .filter_map(|(index, (message, value))| {
                message.map(|message| FieldError {
                    index,
                    name: value.name.clone(),
                    message: message.to_string(),
                })
            })
            .collect()
    }

    pub fn submit(&mut self) -> Result<CreateTemplateVersionRequest, FormError> {
        self.touched.iter_mut().for_each(|t| *t = true);
        let errors = self.validate();
        if !errors.is_empty() {
            debug!("template variables form has {} invalid field(s)", errors.len());
            return Err(FormError::Invalid(errors));
        }
        Ok(self.request.clone())
    }

    /// Builds the helpers of the field at `index`. A backend validation error
    /// for the field wins over the local one and errors only show once the
    /// field is touched, until then `helper_text` is shown.
    pub fn field(
        &self,
        index: usize,
        api_error: Option<&ApiError>,
        helper_text: Option<&str>,
    ) -> Option<FieldHelpers> {
        let value = self.request.user_variable_values.get(index)?;
        let name = field_path(index);
        let error = api_error
            .and_then(|e| e.validation_for(&name))
            .map(str::to_owned)
            .or_else(|| self.field_error(index).map(str::to_owned));
        let touched = self.is_touched(index);

        let helper_text = match error {
            Some(error) if touched => Some(error),
            _ => helper_text.map(str::to_owned),
        };

        Some(FieldHelpers {
            id: name.clone(),
            error: touched && self.has_error(index, api_error),
            value: value.value.clone(),
            helper_text,
            name,
        })
    }

    fn has_error(&self, index: usize, api_error: Option<&ApiError>) -> bool {
        let name = field_path(index);
        api_error.is_some_and(|e| e.validation_for(&name).is_some())
            || self.field_error(index).is_some()
    }

    /// The part of a backend error that cannot be shown next to a field.
    pub fn form_error(&self, api_error: Option<&ApiError>) -> Option<String> {
        let error = api_error?;
        let matches_field = (0..self.values().len())
            .any(|index| error.validation_for(&field_path(index)).is_some());
        if matches_field {
            None
        } else {
            Some(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use wsc_models::dtos::{ProvisionerJob, ValidationError, VariableType};

    fn template_version() -> TemplateVersion {
        let mut tags = BTreeMap::new();
        tags.insert("scope".to_string(), "organization".to_string());
        TemplateVersion {
            id: "version-1".to_string(),
            template_id: Some("template-1".to_string()),
            name: "v1".to_string(),
            job: ProvisionerJob {
                id: "job-1".to_string(),
                file_id: "file-1".to_string(),
                tags,
            },
        }
    }

    fn variables() -> Vec<TemplateVersionVariable> {
        vec![
            TemplateVersionVariable {
                name: "region".to_string(),
                var_type: VariableType::String,
                required: true,
                ..Default::default()
            },
            TemplateVersionVariable {
                name: "token".to_string(),
                var_type: VariableType::String,
                value: "stored".to_string(),
                sensitive: true,
                required: true,
                ..Default::default()
            },
            TemplateVersionVariable {
                name: "debug".to_string(),
                var_type: VariableType::Bool,
                default_value: "false".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn request_is_built_from_the_template_version() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables());
        let request = form.request();

        assert_eq!(request.template_id.as_deref(), Some("template-1"));
        assert_eq!(request.file_id, "file-1");
        assert_eq!(request.tags.get("scope"), Some(&"organization".to_string()));
        assert_eq!(request.provisioner, ProvisionerType::Terraform);
        assert_eq!(request.storage_method, ProvisionerStorageMethod::File);
        assert_eq!(
            request.user_variable_values,
            vec![
                VariableValue::new("region", ""),
                VariableValue::new("token", ""),
                VariableValue::new("debug", "false"),
            ]
        );
    }

    #[test]
    fn submit_fails_on_empty_required_variable() {
        let mut form = TemplateVariablesFormState::new(&template_version(), &variables());

        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            FormError::Invalid(vec![FieldError {
                index: 0,
                name: "region".to_string(),
                message: "Variable is required.".to_string(),
            }])
        );
        assert!((0..3).all(|i| form.is_touched(i)));
    }

    #[test]
    fn submit_returns_edited_values() {
        let mut form = TemplateVariablesFormState::new(&template_version(), &variables());
        form.set_value(0, "eu-west-1").unwrap();
        form.set_value(2, "true").unwrap();

        let request = form.submit().unwrap();
        assert_eq!(request.provisioner, ProvisionerType::Terraform);
        assert_eq!(request.storage_method, ProvisionerStorageMethod::File);
        assert_eq!(request.user_variable_values[0], VariableValue::new("region", "eu-west-1"));
        assert_eq!(request.user_variable_values[1], VariableValue::new("token", ""));
        assert_eq!(request.user_variable_values[2], VariableValue::new("debug", "true"));
    }

    #[test]
    fn set_value_out_of_range_is_an_error() {
        let mut form = TemplateVariablesFormState::new(&template_version(), &variables());
        assert_eq!(form.set_value(3, "x"), Err(FormError::UnknownField(3)));
    }

    #[test]
    fn errors_are_hidden_until_touched() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables());
        let field = form.field(0, None, None).unwrap();

        assert_eq!(field.name, "user_variable_values[0].value");
        assert!(!field.error);
        assert_eq!(field.helper_text, None);
    }

    #[test]
    fn touched_field_shows_local_error() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables())
            .with_initial_touched(&[0]);
        let field = form.field(0, None, None).unwrap();

        assert!(field.error);
        assert_eq!(field.helper_text.as_deref(), Some("Variable is required."));
    }

    #[test]
    fn api_validation_error_wins_over_local_error() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables())
            .with_initial_touched(&[0]);
        let api_error = ApiError {
            message: "Invalid request".to_string(),
            detail: None,
            validations: vec![ValidationError {
                field: "user_variable_values[0].value".to_string(),
                detail: "region is not supported".to_string(),
            }],
        };

        let field = form.field(0, Some(&api_error), None).unwrap();
        assert!(field.error);
        assert_eq!(field.helper_text.as_deref(), Some("region is not supported"));
        assert_eq!(form.form_error(Some(&api_error)), None);
    }

    #[test]
    fn sensitive_field_keeps_helper_text() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables())
            .with_initial_touched(&[1]);
        let field = form.field(1, None, Some("Sensitive value")).unwrap();

        assert!(!field.error);
        assert_eq!(field.helper_text.as_deref(), Some("Sensitive value"));
    }

    #[test]
    fn unrelated_api_error_is_a_form_error() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables());
        let api_error = ApiError {
            message: "Template not found".to_string(),
            ..Default::default()
        };

        assert_eq!(
            form.form_error(Some(&api_error)).as_deref(),
            Some("Template not found")
        );
        assert_eq!(form.form_error(None), None);
    }

    #[test]
    fn field_out_of_range_is_none() {
        let form = TemplateVariablesFormState::new(&template_version(), &variables());
        assert!(form.field(10, None, None).is_none());
    }
}
