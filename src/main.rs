#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::HostConfig;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "neurucare stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env();
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "neurucare listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
