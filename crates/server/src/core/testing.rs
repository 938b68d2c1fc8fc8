use crate::core::config::AppState;
use crate::core::error::Result;
use axum::{extract::State, http::StatusCode};
use tracing::warn;

/// POST /api/testing/reset
///
/// Only routed when testing mode is on.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode> {
    warn!("POST /api/testing/reset - wiping all data");
    state.store.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
