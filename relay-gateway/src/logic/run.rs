use crate::{run_request::RunRequest, server::AppState};
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use relay_domain::{RelayError, RunResponse};
use serde_json::Value;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<AppState>> {
    Router::new().route("/run", post(run))
}

/// The relay: validate, call the upstream workflow once, extract the result
/// text. A body that does not parse as JSON is treated as an empty payload so
/// the failure surfaces as the usual validation error.
#[tracing::instrument(skip(state, body))]
pub async fn run(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RunResponse>, RelayError> {
    let payload = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    let request = RunRequest::from_value(&payload)?;

    let data = state.workflow.run_workflow(request.into_inputs()).await?;

    Ok(Json(RunResponse::from_output(data)))
}
