use crate::run_workflow::RunWorkflow;
use async_trait::async_trait;
use relay_domain::{RelayError, WorkflowInputs};
use serde_json::Value;

/// Workflow runner that answers every call with a canned result.
#[derive(Debug, Clone)]
pub struct MockWorkflow {
    result: Result<Value, RelayError>,
}

impl MockWorkflow {
    pub fn returning(data: Value) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failing(error: RelayError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl RunWorkflow for MockWorkflow {
    async fn run_workflow(&self, _inputs: WorkflowInputs) -> Result<Value, RelayError> {
        self.result.clone()
    }
}
