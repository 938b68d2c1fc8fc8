//! Blog routes: listing, creation, owner-guarded mutation, statistics.

pub mod handlers;
pub mod stats;

pub use handlers::{create_blog, delete_blog, get_blog, list_blogs, update_blog, update_likes};
pub use stats::blog_stats;
