//! nbi-web - Next Business Idea web service
//!
//! Collects a user profile, generates scored small-business ideas from the
//! curated catalog, and persists favorites to an in-memory store.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use nbi_web::config::{Cli, ServerConfig};
use nbi_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Next Business Idea (nbi-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli)?;

    let state = AppState::new();
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("nbi-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
