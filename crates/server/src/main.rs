use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;

use config::{load_settings, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let app = build_router(&settings)?;

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, allowed_origin = %settings.allowed_origin, "address intake listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(settings: &Settings) -> anyhow::Result<Router> {
    api::routes(&settings.allowed_origin)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
