use envconfig::Envconfig;
use relay_domain::WorkflowConfig;
use std::{
    fmt::{Display, Formatter},
    net::SocketAddr,
};

#[derive(Envconfig, Clone)] // Intentionally no Debug so secret is not printed
pub struct RelayConfig {
    #[envconfig(from = "WORKER_THREADS")]
    pub worker_threads: Option<usize>,
    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,
    #[envconfig(from = "HTTP_CLIENT_TIMEOUT_SECS", default = "60")]
    pub http_client_timeout_secs: u64,
    #[envconfig(from = "STATIC_DIR", default = "public")]
    pub static_dir: String,
    #[envconfig(nested = true)]
    pub workflow: WorkflowConfig,
}

impl RelayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Display for RelayConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WORKER_THREADS: {:?}", self.worker_threads)?;
        writeln!(f, "PORT: {}", self.port)?;
        writeln!(
            f,
            "HTTP_CLIENT_TIMEOUT_SECS: {}",
            self.http_client_timeout_secs
        )?;
        writeln!(f, "STATIC_DIR: {}", self.static_dir)?;
        write!(f, "{}", self.workflow)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            port: 8080,
            http_client_timeout_secs: 60,
            static_dir: "public".to_owned(),
            workflow: WorkflowConfig::default(),
        }
    }
}
