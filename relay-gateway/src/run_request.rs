use relay_domain::{RelayError, ValidationError, WorkflowInputs};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub event: String,
    pub main_point: String,
}

impl RunRequest {
    /// Validates the inbound payload, reporting the first missing field.
    /// Anything that is not an object fails on `event` like an empty body
    /// would.
    pub fn from_value(payload: &Value) -> Result<Self, RelayError> {
        Ok(Self {
            event: required_string(payload, "event")?,
            main_point: required_string(payload, "main_point")?,
        })
    }

    pub fn into_inputs(self) -> WorkflowInputs {
        WorkflowInputs {
            event: self.event,
            main_point: self.main_point,
        }
    }
}

fn required_string(payload: &Value, field: &str) -> Result<String, RelayError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ValidationError::missing_field(field))
}
