use std::fmt::{Display, Formatter};

use envconfig::Envconfig;

/// Upstream workflow API coordinates. The defaults are deliberately
/// non-functional placeholders so a misconfigured deployment fails loudly
/// instead of calling someone else's endpoint.
#[derive(Envconfig, Clone)] // Intentionally no Debug so secret is not printed
pub struct WorkflowConfig {
    #[envconfig(
        from = "DIFY_WORKFLOW_URL",
        default = "http://your-dify-host/v1/workflows/run"
    )]
    pub workflow_url: String,
    #[envconfig(from = "DIFY_API_KEY", default = "app-your-api-key")]
    pub api_key: String,
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            workflow_url: "http://your-dify-host/v1/workflows/run".to_owned(),
            api_key: "app-your-api-key".to_owned(),
        }
    }
}

impl Display for WorkflowConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DIFY_WORKFLOW_URL: {}", self.workflow_url)?;
        writeln!(f, "DIFY_API_KEY: ****")
    }
}
