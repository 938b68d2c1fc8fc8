//! Typed client for the blog list API.
//!
//! Credentials are passed into every call that needs one; the client
//! itself holds no token.

mod client;
mod config;
mod credential;
mod error;
mod ordering;

pub use client::BlogClient;
pub use config::ClientConfig;
pub use credential::{Credential, Session};
pub use error::{ClientError, Result};
pub use ordering::rank_by_likes;
