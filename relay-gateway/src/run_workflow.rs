use async_trait::async_trait;
use relay_domain::{RelayError, WorkflowCaller, WorkflowInputs};
use serde_json::Value;

/// Seam between the HTTP handler and the upstream workflow API, so the
/// router can be exercised without a live upstream.
#[async_trait]
pub trait RunWorkflow {
    async fn run_workflow(&self, inputs: WorkflowInputs) -> Result<Value, RelayError>;
}

#[async_trait]
impl RunWorkflow for WorkflowCaller {
    async fn run_workflow(&self, inputs: WorkflowInputs) -> Result<Value, RelayError> {
        self.run(inputs).await
    }
}
