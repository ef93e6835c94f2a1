use anyhow::{Context, Result};
use policynth_api::{app, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env().context("Failed to load configuration")?;
    let addr = settings.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(settings)).await?;
    Ok(())
}
