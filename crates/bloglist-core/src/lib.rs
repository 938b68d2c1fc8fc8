//! bloglist-core: shared model and rules for the blog list service.
//!
//! - **ids**: canonical blog and user identifiers.
//! - **models**: stored records and the views served over the API.
//! - **api**: request and response bodies shared by server and client.
//! - **stats**: aggregate statistics over a collection of blogs.
//! - **ownership**: the rule deciding who may mutate a blog.

pub mod api;
pub mod error;
pub mod ids;
pub mod models;
pub mod ownership;
pub mod stats;

pub use error::{CoreError, Result};
pub use ids::{canonical_id, BlogId, UserId};
pub use models::{BlogRecord, BlogSummary, BlogView, UserRecord, UserSummary, UserView};
pub use ownership::{authorize, ensure_owner, Decision, DenyReason};
pub use stats::{
    favourite_blog, most_blogs, most_likes, summarize, total_likes, AuthorBlogs, AuthorLikes,
    BlogStats, FavouriteBlog,
};
