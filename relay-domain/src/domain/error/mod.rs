pub mod axum_error;

use http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Inbound request rejected before any upstream call was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl ValidationError {
    pub fn missing_field(field: &str) -> RelayError {
        RelayError::Validation(ValidationError::MissingField {
            field: field.to_owned(),
        })
    }
}

/// Outbound call failure. `NoResponse` means nothing usable came back over
/// the wire; `ErrorStatus` means the upstream answered with a non-2xx status
/// and that status and body are echoed to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpstreamError {
    #[error("No response from workflow API: {message}")]
    NoResponse { message: String },
    #[error("Workflow API responded with status {status}")]
    ErrorStatus { status: StatusCode, body: Value },
}

impl UpstreamError {
    pub fn no_response(message: &str) -> RelayError {
        RelayError::Upstream(UpstreamError::NoResponse {
            message: message.to_owned(),
        })
    }

    pub fn error_status(status: StatusCode, body: Value) -> RelayError {
        RelayError::Upstream(UpstreamError::ErrorStatus { status, body })
    }

    /// The `details` value surfaced to the client.
    pub fn details(&self) -> Value {
        match self {
            UpstreamError::NoResponse { message } => json!({ "message": message }),
            UpstreamError::ErrorStatus { body, .. } => body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    /// The JSON body sent to the client for this error.
    pub fn as_json(&self) -> Value {
        match self {
            RelayError::Validation(error) => json!({ "error": error.to_string() }),
            RelayError::Upstream(error) => json!({
                "error": "Failed to run workflow",
                "details": error.details(),
            }),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RelayError::Validation(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, RelayError::Upstream(_))
    }
}

impl From<&RelayError> for StatusCode {
    fn from(error: &RelayError) -> Self {
        match error {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(UpstreamError::NoResponse { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayError::Upstream(UpstreamError::ErrorStatus { status, .. }) => *status,
        }
    }
}
