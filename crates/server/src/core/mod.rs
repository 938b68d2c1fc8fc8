//! Core Service Layer
//!
//! Shared infrastructure for the blog server: authentication,
//! configuration, request context, errors and storage.

pub mod auth;
pub mod body;
pub mod config;
pub mod ctx;
pub mod error;
pub mod router;
pub mod store;
pub mod testing;

// Re-exports for convenience
pub use body::JsonBody;
pub use config::{AppState, ServerConfig};
pub use ctx::Ctx;
pub use error::{Error, Result};
pub use router::router;
