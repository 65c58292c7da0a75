// Endpoint response - the flat field mapping returned by each data endpoint
use crate::domain::error::{DashboardError, Result};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointResponse {
    fields: Map<String, Value>,
}

impl EndpointResponse {
    /// Accepts only a JSON object at the top level.
    pub fn from_value(url: &str, value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DashboardError::Decode {
                context: format!("response from {}", url),
                message: format!("expected a JSON object, got {}", kind_of(&other)),
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Text written into an element for a plain (non-chart) field.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_object() {
        let err = EndpointResponse::from_value("http://localhost:8000/startpage", json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "decode failure in response from http://localhost:8000/startpage: expected a JSON object, got an array"
        );
    }

    #[test]
    fn test_display_text() {
        assert_eq!(display_text(&json!("3 days")), "3 days");
        assert_eq!(display_text(&json!(12)), "12");
        assert_eq!(display_text(&json!(0.2734)), "0.2734");
        assert_eq!(display_text(&json!(true)), "true");
        assert_eq!(display_text(&Value::Null), "");
        assert_eq!(display_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_get_field() {
        let response = EndpointResponse::from_value("u", json!({"missing_gas": 3})).unwrap();
        assert_eq!(response.get("missing_gas"), Some(&json!(3)));
        assert_eq!(response.get("missing_electric"), None);
        assert_eq!(response.len(), 1);
    }
}
