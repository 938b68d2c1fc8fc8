//! Blog List Server Library
//!
//! REST backend for the blog list: users, token login, blog CRUD with
//! owner-only mutation, and aggregate statistics.

pub mod blogs;
pub mod core;

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use crate::core::{router, AppState, ServerConfig};

/// Build the application router over an already opened state.
pub fn app(state: AppState) -> axum::Router {
    router(state)
}

pub async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        // Already set, ignore
    }

    info!("=== Blog List Server ===");

    let config = ServerConfig::default();
    config.ensure_dirs().await?;

    info!("Data directory: {:?}", config.data_dir);
    if config.testing_mode {
        info!("Testing mode enabled: /api/testing/reset is routed");
    }

    let state = AppState::new(config.clone()).await?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
