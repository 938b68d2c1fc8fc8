use crate::core::error::{Error, Result};
use axum::{extract::FromRequestParts, http::request::Parts};
use bloglist_core::UserId;

/// Authenticated caller, placed in request extensions by the token
/// middleware. Extracting it on a request without a token rejects with 401.
#[derive(Clone, Debug)]
pub struct Ctx {
    user_id: UserId,
    username: String,
}

impl Ctx {
    pub fn new(user_id: UserId, username: String) -> Self {
        Self { user_id, username }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Ctx>()
            .cloned()
            .ok_or(Error::AuthFailNoToken)
    }
}
