use crate::core::body::JsonBody;
use crate::core::config::AppState;
use crate::core::error::Result;
use axum::{extract::State, http::StatusCode, Json};
use bloglist_core::api::NewUser;
use bloglist_core::{UserRecord, UserView};
use tracing::{info, warn};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserView>> {
    info!("GET /api/users");
    Json(state.store.list_user_views().await)
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<UserView>)> {
    info!("POST /api/users - {:?}", req.username);

    let valid = req.validate().inspect_err(|e| {
        warn!("Rejected registration: {}", e);
    })?;

    let password_hash = state.auth.hash_password(&valid.password)?;
    let user = state
        .store
        .insert_user(UserRecord::new(valid.username, valid.name, password_hash))
        .await?;

    info!("User registered: {}", user.username);

    Ok((StatusCode::CREATED, Json(user.view(|_| None))))
}
