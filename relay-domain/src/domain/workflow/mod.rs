use crate::extract_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BLOCKING_RESPONSE_MODE: &str = "blocking";
pub const WORKFLOW_USER: &str = "web-user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInputs {
    pub event: String,
    pub main_point: String,
}

/// Wire format of an upstream workflow run. The workflow API is only ever
/// called in blocking mode, so the payload is built through [`Self::blocking`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRunPayload {
    pub inputs: WorkflowInputs,
    pub response_mode: String,
    pub user: String,
}

impl WorkflowRunPayload {
    pub fn blocking(inputs: WorkflowInputs) -> Self {
        Self {
            inputs,
            response_mode: BLOCKING_RESPONSE_MODE.to_owned(),
            user: WORKFLOW_USER.to_owned(),
        }
    }
}

/// Client-facing success payload: either the extracted article text, or the
/// untouched upstream body when no extraction rule yields a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunResponse {
    Article { article: String },
    Raw { raw: Value },
}

impl RunResponse {
    pub fn from_output(data: Value) -> Self {
        match extract_text(&data) {
            Some(article) => RunResponse::Article { article },
            None => RunResponse::Raw { raw: data },
        }
    }
}
