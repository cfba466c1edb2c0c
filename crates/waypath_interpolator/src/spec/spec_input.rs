use serde_json::Value;

use crate::json::types::JsonPathSpecification;

/// A path specification as handed to the interpolator: either an already
/// structured value or its JSON text encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecInput {
    Structured(Value),
    Text(String),
}

impl SpecInput {
    /// The input as the caller provided it, for error reporting.
    pub fn raw(&self) -> String {
        match self {
            SpecInput::Structured(value) => value.to_string(),
            SpecInput::Text(text) => text.clone(),
        }
    }

    /// Normalizes both forms into a single JSON value.
    pub fn into_value(self) -> Result<Value, serde_json::Error> {
        match self {
            SpecInput::Structured(value) => Ok(value),
            SpecInput::Text(text) => serde_json::from_str(&text),
        }
    }
}

impl From<Value> for SpecInput {
    fn from(value: Value) -> Self {
        SpecInput::Structured(value)
    }
}

impl From<&Value> for SpecInput {
    fn from(value: &Value) -> Self {
        SpecInput::Structured(value.clone())
    }
}

impl From<&str> for SpecInput {
    fn from(value: &str) -> Self {
        SpecInput::Text(value.to_owned())
    }
}

impl From<String> for SpecInput {
    fn from(value: String) -> Self {
        SpecInput::Text(value)
    }
}

impl From<&JsonPathSpecification> for SpecInput {
    fn from(value: &JsonPathSpecification) -> Self {
        // Non-finite numbers serialize as `null` and are rejected by the
        // validator like any other non-numeric field.
        SpecInput::Structured(serde_json::to_value(value).unwrap_or(Value::Null))
    }
}

impl From<JsonPathSpecification> for SpecInput {
    fn from(value: JsonPathSpecification) -> Self {
        SpecInput::from(&value)
    }
}
