use crate::core::config::AppState;
use axum::{extract::State, Json};
use bloglist_core::{summarize, BlogStats};
use tracing::info;

/// GET /api/stats
pub async fn blog_stats(State(state): State<AppState>) -> Json<BlogStats> {
    info!("GET /api/stats");
    let blogs = state.store.list_blogs().await;
    Json(summarize(&blogs))
}
