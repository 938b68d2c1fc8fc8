use crate::core::config::AppState;
use crate::core::ctx::Ctx;
use crate::core::error::{Error, Result};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Resolve a bearer token into a [`Ctx`] when one is sent.
///
/// Requests without an `Authorization` header pass through untouched;
/// routes that need a caller reject them when extracting `Ctx`. A header
/// that is present but malformed or invalid is rejected here.
pub async fn mw_extract_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    debug!("MIDDLEWARE: extract_token");

    let auth_header = match req.headers().get(header::AUTHORIZATION) {
        Some(h) => h.to_str().map_err(|_| Error::AuthFailTokenWrongFormat)?,
        None => return Ok(next.run(req).await),
    };

    let token = bearer_token(auth_header).ok_or(Error::AuthFailTokenWrongFormat)?;

    let claims = state
        .auth
        .validate_token(token)
        .map_err(|_| Error::AuthFailTokenInvalid)?;
    let user_id = claims.user_id().map_err(|_| Error::AuthFailTokenInvalid)?;

    req.extensions_mut().insert(Ctx::new(user_id, claims.username));

    Ok(next.run(req).await)
}

/// Format: "Bearer <token>", scheme matched case-insensitively.
fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
