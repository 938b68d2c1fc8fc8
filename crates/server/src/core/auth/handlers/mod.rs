//! Auth and user handlers

pub mod login;
pub mod users;

pub use login::login;
pub use users::{create_user, list_users};
