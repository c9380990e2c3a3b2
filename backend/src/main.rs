use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config {
    pub mod site;
}
mod handlers {
    pub mod quote_handlers;
}
mod router;

use config::site::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("failed to load site config")?;
    tracing::info!(dist = %config.dist_dir.display(), "Serving site");

    let app = router::app(&config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
