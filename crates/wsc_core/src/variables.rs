use wsc_models::dtos::{TemplateVersionVariable, VariableValue};

pub const VARIABLE_REQUIRED_MESSAGE: &str = "Variable is required.";

fn initial_value(variable: &TemplateVersionVariable) -> &str {
    // Boolean variables must always be either "true" or "false".
    if variable.is_bool() && variable.value.is_empty() {
        return &variable.default_value;
    }

    // Never prefill secrets.
    if variable.sensitive {
        return "";
    }

    if variable.required && variable.value.is_empty() {
        return &variable.default_value;
    }

    &variable.value
}

/// Builds the initial form values, one per template variable and in the same
/// order.
pub fn select_initial_user_variable_values(
    variables: &[TemplateVersionVariable],
) -> Vec<VariableValue> {
    variables
        .iter()
        .map(|v| VariableValue::new(&v.name, initial_value(v)))
        .collect()
}

/// Checks a single value against the variable declared with the same name.
/// Returns the user facing message on failure.
///
/// Sensitive variables always pass since a secret might already be stored in
/// the backend, so an empty value cannot be told apart from an unchanged one.
pub fn validate_user_variable_value(
    value: &VariableValue,
    variables: &[TemplateVersionVariable],
) -> Option<&'static str> {
    let variable = variables.iter().find(|v| v.name == value.name)?;

    if variable.sensitive {
        return None;
    }

    if variable.required && value.value.is_empty() {
        return Some(VARIABLE_REQUIRED_MESSAGE);
    }

    None
}

pub fn validate_user_variable_values(
    values: &[VariableValue],
    variables: &[TemplateVersionVariable],
) -> Vec<Option<&'static str>> {
    values
        .iter()
        .map(|v| validate_user_variable_value(v, variables))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsc_models::dtos::VariableType;

    fn variable(name: &str, var_type: VariableType) -> TemplateVersionVariable {
        TemplateVersionVariable {
            name: name.to_string(),
            var_type,
            ..Default::default()
        }
    }

    #[test]
    fn initial_values_keep_length_and_order() {
        let variables = vec![
            variable("first", VariableType::String),
            variable("second", VariableType::Number),
            variable("third", VariableType::Bool),
        ];

        let values = select_initial_user_variable_values(&variables);
        let names: Vec<&str> = values.iter().map(|v| v.name.as_str()).collect();

        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_variable_list_gives_empty_values() {
        assert!(select_initial_user_variable_values(&[]).is_empty());
    }

    #[test]
    fn empty_bool_uses_default_even_when_sensitive() {
        let mut var = variable("enabled", VariableType::Bool);
        var.default_value = "false".to_string();
        var.sensitive = true;
        var.required = true;

        let values = select_initial_user_variable_values(&[var]);
        assert_eq!(values[0].value, "false");
    }

    #[test]
    fn bool_with_value_keeps_value() {
        let mut var = variable("enabled", VariableType::Bool);
        var.default_value = "false".to_string();
        var.value = "true".to_string();

        let values = select_initial_user_variable_values(&[var]);
        assert_eq!(values[0].value, "true");
    }

    #[test]
    fn sensitive_value_is_never_prefilled() {
        let mut var = variable("token", VariableType::String);
        var.value = "s3cr3t".to_string();
        var.default_value = "default".to_string();
        var.sensitive = true;

        let values = select_initial_user_variable_values(&[var]);
        assert_eq!(values[0].value, "");
    }

    #[test]
    fn required_empty_uses_default() {
        let mut var = variable("region", VariableType::String);
        var.default_value = "eu-west-1".to_string();
        var.required = true;

        let values = select_initial_user_variable_values(&[var]);
        assert_eq!(values[0].value, "eu-west-1");
    }

    #[test]
    fn optional_empty_stays_empty() {
        let mut var = variable("region", VariableType::String);
        var.default_value = "eu-west-1".to_string();

        let values = select_initial_user_variable_values(&[var]);
        assert_eq!(values[0].value, "");
    }

    #[test]
    fn current_value_is_kept() {
        let mut var = variable("replicas", VariableType::Number);
        var.default_value = "1".to_string();
        var.value = "3".to_string();
        var.required = true;

        let values = select_initial_user_variable_values(&[var]);
        assert_eq!(values[0].value, "3");
    }

    #[test]
    fn required_empty_value_fails_validation() {
        let mut var = variable("region", VariableType::String);
        var.required = true;

        let value = VariableValue::new("region", "");
        assert_eq!(
            validate_user_variable_value(&value, &[var]),
            Some("Variable is required.")
        );
    }

    #[test]
    fn required_filled_value_passes_validation() {
        let mut var = variable("region", VariableType::String);
        var.required = true;

        let value = VariableValue::new("region", "us-east-1");
        assert_eq!(validate_user_variable_value(&value, &[var]), None);
    }

    #[test]
    fn sensitive_required_value_always_passes() {
        let mut var = variable("token", VariableType::String);
        var.required = true;
        var.sensitive = true;

        let value = VariableValue::new("token", "");
        assert_eq!(validate_user_variable_value(&value, &[var]), None);
    }

    #[test]
    fn unknown_variable_passes() {
        let value = VariableValue::new("unknown", "");
        assert_eq!(validate_user_variable_value(&value, &[]), None);
    }

    #[test]
    fn values_are_validated_against_variables_by_name() {
        let mut required = variable("required", VariableType::String);
        required.required = true;
        let optional = variable("optional", VariableType::String);

        // Values are in a different order than the variables.
        let values = vec![
            VariableValue::new("optional", ""),
            VariableValue::new("required", ""),
        ];

        assert_eq!(
            validate_user_variable_values(&values, &[required, optional]),
            vec![None, Some(VARIABLE_REQUIRED_MESSAGE)]
        );
    }
}
