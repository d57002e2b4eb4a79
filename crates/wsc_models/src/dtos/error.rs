use serde::{Deserialize, Serialize};

/// A validation failure reported by the backend for a single request field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub detail: String,
}

/// The error body returned by the console API.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub validations: Vec<ValidationError>,
}

impl ApiError {
    pub fn validation_for(&self, field: &str) -> Option<&str> {
        self.validations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.detail.as_str())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) if !detail.is_empty() => write!(f, "{}: {detail}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validations_are_looked_up_by_field() {
        let error: ApiError = serde_json::from_value(json!({
            "message": "Invalid request",
            "validations": [
                { "field": "user_variable_values[1].value", "detail": "must be a number" }
            ]
        }))
        .unwrap();

        assert_eq!(
            error.validation_for("user_variable_values[1].value"),
            Some("must be a number")
        );
        assert_eq!(error.validation_for("user_variable_values[0].value"), None);
    }

    #[test]
    fn display_includes_detail() {
        let error = ApiError {
            message: "Internal error".to_string(),
            detail: Some("database unavailable".to_string()),
            ..Default::default()
        };
        assert_eq!(error.to_string(), "Internal error: database unavailable");
    }
}
