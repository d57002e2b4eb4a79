use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    String,
    Number,
    Bool,
}

/// A variable declared by a template version. Supplied by the backend and
/// never edited in place, the editable counterpart is [`VariableValue`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersionVariable {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub sensitive: bool,
}

impl TemplateVersionVariable {
    pub fn is_bool(&self) -> bool {
        self.var_type == VariableType::Bool
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableValue {
    pub name: String,
    pub value: String,
}

impl VariableValue {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionerJob {
    #[serde(default)]
    pub id: String,
    pub file_id: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub job: ProvisionerJob,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProvisionerType {
    Echo,
    #[default]
    Terraform,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProvisionerStorageMethod {
    #[default]
    File,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTemplateVersionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub provisioner: ProvisionerType,
    pub storage_method: ProvisionerStorageMethod,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub file_id: String,
    #[serde(default)]
    pub user_variable_values: Vec<VariableValue>,
}

/// The input file of the `variables` command, a template version with the
/// variables it declares.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersionWithVariables {
    pub template_version: TemplateVersion,
    #[serde(default)]
    pub variables: Vec<TemplateVersionVariable>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variable_type_field_is_named_type() {
        let var: TemplateVersionVariable = serde_json::from_value(json!({
            "name": "region",
            "description": "Cloud region",
            "type": "bool",
            "default_value": "true",
            "value": "",
            "required": false,
            "sensitive": false
        }))
        .unwrap();

        assert_eq!(var.var_type, VariableType::Bool);
        assert!(var.is_bool());
        assert_eq!(var.default_value, "true");
    }

    #[test]
    fn variable_optional_fields_default() {
        let var: TemplateVersionVariable =
            serde_json::from_value(json!({ "name": "token", "type": "string" })).unwrap();

        assert_eq!(var.value, "");
        assert_eq!(var.default_value, "");
        assert!(!var.required);
        assert!(!var.sensitive);
    }

    #[test]
    fn create_request_serializes_fixed_values() {
        let request = CreateTemplateVersionRequest {
            template_id: Some("tmpl".to_string()),
            file_id: "file".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["provisioner"], "terraform");
        assert_eq!(value["storage_method"], "file");
        assert_eq!(value["template_id"], "tmpl");
        assert_eq!(value["user_variable_values"], json!([]));
    }

    #[test]
    fn create_request_skips_missing_template_id() {
        let value = serde_json::to_value(CreateTemplateVersionRequest::default()).unwrap();
        assert!(value.get("template_id").is_none());
    }
}
