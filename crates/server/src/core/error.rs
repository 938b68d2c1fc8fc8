use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bloglist_core::api::ErrorResponse;
use bloglist_core::CoreError;
use tracing::{debug, error};

use crate::core::store::StoreError;

#[derive(Debug)]
pub enum Error {
    // Auth Errors
    LoginFail,
    AuthFailNoToken,
    AuthFailTokenWrongFormat,
    AuthFailTokenInvalid,
    AuthFailUserGone,

    // Model Errors
    NotCreator,
    NotFound(String),
    MalformattedId(String),
    Validation(String),
    UsernameTaken(String),

    // Generic
    UnknownEndpoint,
    Internal(String),
}

pub type Result<T> = core::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Error::LoginFail => (
                StatusCode::UNAUTHORIZED,
                "invalid username or password".to_string(),
            ),
            Error::AuthFailNoToken => (StatusCode::UNAUTHORIZED, "token missing".to_string()),
            Error::AuthFailTokenWrongFormat => (
                StatusCode::UNAUTHORIZED,
                "Auth token wrong format".to_string(),
            ),
            Error::AuthFailTokenInvalid => (StatusCode::UNAUTHORIZED, "token invalid".to_string()),
            Error::AuthFailUserGone => (
                StatusCode::UNAUTHORIZED,
                "user for token not found".to_string(),
            ),
            Error::NotCreator => (
                StatusCode::UNAUTHORIZED,
                CoreError::Authorization.to_string(),
            ),
            Error::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            Error::MalformattedId(raw) => {
                debug!("Rejected malformatted id {:?}", raw);
                (StatusCode::BAD_REQUEST, "malformatted id".to_string())
            }
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::UsernameTaken(username) => (
                StatusCode::BAD_REQUEST,
                format!("expected `username` to be unique: {}", username),
            ),
            Error::UnknownEndpoint => (StatusCode::NOT_FOUND, "unknown endpoint".to_string()),
            Error::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Error::Validation(msg),
            CoreError::Authorization => Error::NotCreator,
            CoreError::NotFound(what) => Error::NotFound(what),
            CoreError::InvalidReference(raw) => Error::MalformattedId(raw),
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken(username) => Error::UsernameTaken(username),
            StoreError::Rejected(rejection) => Error::from(rejection),
            other => Error::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err.to_string())
    }
}
