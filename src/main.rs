mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = config::HostConfig::from_env()?;
    let app = routes::app().map_err(HostError::Router)?;
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;

    tracing::info!(port = cfg.port, "notehub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
