use reelmatch::api::{create_router, AppState};
use reelmatch::config::Config;
use reelmatch::services;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // The catalog and similarity index must be fully built before any
    // query is served; a build failure here aborts startup.
    let (catalog, index) = services::build_from_dataset(&config)?;

    let state = AppState::new(config.clone(), catalog, index);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
