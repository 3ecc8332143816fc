use anyhow::Result;
use dotenvy::dotenv;
use envconfig::Envconfig;
use relay_domain::telemetry::{get_subscriber, init_subscriber};
use relay_gateway::{config::RelayConfig, server::Server};
use tracing::info;

fn main() -> Result<()> {
    dotenv().ok();
    let config = RelayConfig::init_from_env()?;

    let subscriber = get_subscriber("relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    info!("Starting workflow relay with config:\n{config}");

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads.unwrap_or(num_cpus::get()))
        .enable_all()
        .build()?
        .block_on(async move {
            let server = Server::init(config)?;

            info!("Server started");

            server.run().await
        })
}
