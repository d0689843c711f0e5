use anyhow::{Context, Result};
use dotenv::dotenv;

use vocab_trainer::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init_timed();
    log::info!("Starting vocabulary trainer...");

    let config = Config::from_env().context("invalid configuration")?;
    log::debug!("{config:?}");

    let app = vocab_trainer::build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    log::info!("Server running on: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
