use crate::core::body::JsonBody;
use crate::core::config::AppState;
use crate::core::error::{Error, Result};
use axum::{extract::State, Json};
use bloglist_core::api::{LoginRequest, LoginResponse};
use tracing::{info, warn};

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    info!("POST /api/login - {}", req.username);

    match state
        .auth
        .login(&state.store, &req.username, &req.password)
        .await
    {
        Ok((user, token)) => Ok(Json(LoginResponse {
            token,
            username: user.username,
            name: user.name,
        })),
        Err(e) => {
            warn!("Login failed for {}: {}", req.username, e);
            Err(Error::LoginFail)
        }
    }
}
