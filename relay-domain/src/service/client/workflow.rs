use crate::{RelayError, UpstreamError, WorkflowConfig, WorkflowInputs, WorkflowRunPayload};
use reqwest::Client;
use serde_json::Value;

/// Client for the upstream workflow API. The `reqwest::Client` is built once
/// at startup with the configured timeout, so every call here is a single
/// bounded attempt.
#[derive(Clone)]
pub struct WorkflowCaller {
    config: WorkflowConfig,
    client: Client,
}

impl WorkflowCaller {
    pub fn new(config: WorkflowConfig, client: Client) -> Self {
        WorkflowCaller { config, client }
    }

    pub async fn run(&self, inputs: WorkflowInputs) -> Result<Value, RelayError> {
        let payload = WorkflowRunPayload::blocking(inputs);

        let response = self
            .client
            .post(&self.config.workflow_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::no_response(&format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::no_response(&format!("Failed to read response: {}", e)))?;

        // The upstream is not guaranteed to answer with JSON; a non-JSON body
        // is carried as a JSON string.
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

        if status.is_success() {
            Ok(body)
        } else {
            Err(UpstreamError::error_status(status, body))
        }
    }
}
