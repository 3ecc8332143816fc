use crate::{config::RelayConfig, router, run_workflow::RunWorkflow};
use anyhow::{anyhow, Result};
use axum::Router;
use relay_domain::WorkflowCaller;
use reqwest::Client;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub workflow: Arc<dyn RunWorkflow + Sync + Send>,
}

#[derive(Clone)]
pub struct Server {
    pub state: Arc<AppState>,
}

impl Server {
    pub fn init(config: RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_client_timeout_secs))
            .build()?;

        let caller = WorkflowCaller::new(config.workflow.clone(), client);

        Ok(Self::new(config, Arc::new(caller)))
    }

    pub fn new(config: RelayConfig, workflow: Arc<dyn RunWorkflow + Sync + Send>) -> Self {
        Self {
            state: Arc::new(AppState { config, workflow }),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let app = router::get_router(&self.state).await;

        let app: Router<()> = app.with_state(self.state.clone());

        let address = self.state.config.address();
        info!("Relay server listening on {}", address);

        let tcp_listener = TcpListener::bind(&address)
            .await
            .map_err(|e| anyhow!("Failed to bind to address: {}", e))?;

        axum::serve(tcp_listener, app.into_make_service())
            .await
            .map_err(|e| anyhow!("Server error: {}", e))
    }
}
