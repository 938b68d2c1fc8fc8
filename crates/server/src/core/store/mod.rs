//! Blog storage module
//!
//! JSON-file document store for blogs and users.

pub mod json_store;

pub use json_store::{JsonBlogStore, StoreError};
