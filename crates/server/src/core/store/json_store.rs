//! JSON-based document store for blogs and users
//!
//! Each collection is kept in memory and written back to its own JSON
//! file after every mutation, via a temp file and an atomic rename.
//! Operations touching both collections lock blogs before users. A
//! change reaches the in-memory cache only after its write succeeded.

use crate::core::config::ServerConfig;
use bloglist_core::api::ValidBlog;
use bloglist_core::{BlogId, BlogRecord, BlogView, CoreError, UserId, UserRecord, UserView};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// A guard or lookup refused the operation.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// JSON document store
pub struct JsonBlogStore {
    config: ServerConfig,
    /// Blogs in insertion order
    blogs: RwLock<Vec<BlogRecord>>,
    /// Users in registration order
    users: RwLock<Vec<UserRecord>>,
}

impl JsonBlogStore {
    /// Open the store, loading any collections already on disk
    pub async fn new(config: ServerConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir).await?;

        let blogs: Vec<BlogRecord> = load_collection(&config.blogs_path()).await?;
        let users: Vec<UserRecord> = load_collection(&config.users_path()).await?;

        info!(
            "JSON BlogStore initialized with {} blogs and {} users",
            blogs.len(),
            users.len()
        );

        Ok(Self {
            config,
            blogs: RwLock::new(blogs),
            users: RwLock::new(users),
        })
    }

    pub async fn list_blogs(&self) -> Vec<BlogRecord> {
        self.blogs.read().await.clone()
    }

    /// All blogs with their owners populated
    pub async fn list_blog_views(&self) -> Vec<BlogView> {
        let blogs = self.blogs.read().await;
        let users = self.users.read().await;
        blogs.iter().map(|blog| view_of(blog, &users)).collect()
    }

    pub async fn get_blog(&self, id: BlogId) -> Option<BlogRecord> {
        self.blogs.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn get_blog_view(&self, id: BlogId) -> Option<BlogView> {
        let blogs = self.blogs.read().await;
        let users = self.users.read().await;
        blogs
            .iter()
            .find(|b| b.id == id)
            .map(|blog| view_of(blog, &users))
    }

    /// Insert a blog and append it to its owner's list
    pub async fn insert_blog(&self, blog: BlogRecord) -> Result<BlogRecord> {
        let mut blogs = self.blogs.write().await;
        let mut users = self.users.write().await;

        let mut next_blogs = blogs.clone();
        next_blogs.push(blog.clone());

        let next_users = match blog.owner {
            Some(owner) => {
                let linked = with_blog_linked(&users, owner, blog.id);
                if linked.is_none() {
                    warn!("Blog {} owned by unknown user {}", blog.id, owner);
                }
                linked
            }
            None => None,
        };

        self.commit(&mut blogs, next_blogs, &mut users, next_users)
            .await?;

        info!("Added blog {} ({})", blog.id, blog.title);
        Ok(blog)
    }

    /// Replace a blog's content. `build` sees the current record (or
    /// `None`) under the write lock and either refuses or yields the
    /// new content.
    pub async fn replace_blog<F>(&self, id: BlogId, build: F) -> Result<BlogRecord>
    where
        F: FnOnce(Option<&BlogRecord>) -> std::result::Result<ValidBlog, CoreError>,
    {
        let mut blogs = self.blogs.write().await;
        let idx = blogs.iter().position(|b| b.id == id);
        let update = build(idx.map(|i| &blogs[i]))?;
        let idx = idx.ok_or_else(CoreError::blog_not_found)?;

        let mut updated = blogs[idx].clone();
        updated.title = update.title;
        updated.author = update.author;
        updated.url = update.url;
        updated.likes = update.likes;

        self.commit_blog(&mut blogs, idx, updated.clone()).await?;
        info!("Replaced blog {}", id);
        Ok(updated)
    }

    /// Set a blog's likes to a caller-supplied value
    pub async fn set_likes(&self, id: BlogId, likes: u64) -> Result<BlogRecord> {
        let mut blogs = self.blogs.write().await;
        let idx = blogs
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(CoreError::blog_not_found)?;

        let mut updated = blogs[idx].clone();
        updated.likes = likes;

        self.commit_blog(&mut blogs, idx, updated.clone()).await?;
        Ok(updated)
    }

    /// Delete a blog if `check` allows it, and drop it from its owner's list
    pub async fn delete_blog<F>(&self, id: BlogId, check: F) -> Result<BlogRecord>
    where
        F: FnOnce(Option<&BlogRecord>) -> std::result::Result<(), CoreError>,
    {
        let mut blogs = self.blogs.write().await;
        let mut users = self.users.write().await;
        let idx = blogs.iter().position(|b| b.id == id);
        check(idx.map(|i| &blogs[i]))?;
        let idx = idx.ok_or_else(CoreError::blog_not_found)?;

        let mut next_blogs = blogs.clone();
        let removed = next_blogs.remove(idx);
        let next_users = removed
            .owner
            .and_then(|owner| with_blog_unlinked(&users, owner, id));

        self.commit(&mut blogs, next_blogs, &mut users, next_users)
            .await?;

        info!("Deleted blog {}", id);
        Ok(removed)
    }

    /// All users with their authored blogs populated
    pub async fn list_user_views(&self) -> Vec<UserView> {
        let blogs = self.blogs.read().await;
        let users = self.users.read().await;
        users
            .iter()
            .map(|user| user.view(|id| blogs.iter().find(|b| b.id == *id)))
            .collect()
    }

    pub async fn get_user(&self, id: UserId) -> Option<UserRecord> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn find_user_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Insert a user, enforcing unique usernames
    pub async fn insert_user(&self, user: UserRecord) -> Result<UserRecord> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken(user.username));
        }

        let mut next = users.clone();
        next.push(user.clone());
        self.save_users(&next).await?;
        *users = next;

        info!("Added user {}", user.username);
        Ok(user)
    }

    /// Empty both collections
    pub async fn reset(&self) -> Result<()> {
        let mut blogs = self.blogs.write().await;
        let mut users = self.users.write().await;
        self.commit(&mut blogs, Vec::new(), &mut users, Some(Vec::new()))
            .await?;
        info!("Store reset");
        Ok(())
    }

    /// Write staged collections, then swap them into the cache. If the
    /// users write fails, the previous blogs file is put back and the
    /// cache is left untouched.
    async fn commit(
        &self,
        blogs: &mut Vec<BlogRecord>,
        next_blogs: Vec<BlogRecord>,
        users: &mut Vec<UserRecord>,
        next_users: Option<Vec<UserRecord>>,
    ) -> Result<()> {
        self.save_blogs(&next_blogs).await?;

        if let Some(next_users) = next_users {
            if let Err(e) = self.save_users(&next_users).await {
                if let Err(restore) = self.save_blogs(blogs).await {
                    error!("Failed to restore blogs after users write error: {}", restore);
                }
                return Err(e);
            }
            *users = next_users;
        }

        *blogs = next_blogs;
        Ok(())
    }

    /// Write a single changed blog, then swap it into the cache
    async fn commit_blog(
        &self,
        blogs: &mut [BlogRecord],
        idx: usize,
        updated: BlogRecord,
    ) -> Result<()> {
        let mut next = blogs.to_vec();
        next[idx] = updated.clone();
        self.save_blogs(&next).await?;
        blogs[idx] = updated;
        Ok(())
    }

    async fn save_blogs(&self, blogs: &[BlogRecord]) -> Result<()> {
        save_collection(&self.config.blogs_path(), blogs).await
    }

    async fn save_users(&self, users: &[UserRecord]) -> Result<()> {
        save_collection(&self.config.users_path(), users).await
    }
}

/// Copy of `users` with `blog` appended to `owner`'s list; `None` if the
/// owner is unknown.
fn with_blog_linked(users: &[UserRecord], owner: UserId, blog: BlogId) -> Option<Vec<UserRecord>> {
    let idx = users.iter().position(|u| u.id == owner)?;
    let mut next = users.to_vec();
    next[idx].blogs.push(blog);
    Some(next)
}

fn with_blog_unlinked(users: &[UserRecord], owner: UserId, blog: BlogId) -> Option<Vec<UserRecord>> {
    let idx = users.iter().position(|u| u.id == owner)?;
    let mut next = users.to_vec();
    next[idx].blogs.retain(|b| *b != blog);
    Some(next)
}

fn view_of(blog: &BlogRecord, users: &[UserRecord]) -> BlogView {
    let owner = blog
        .owner
        .and_then(|owner| users.iter().find(|u| u.id == owner));
    blog.view(owner)
}

async fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !fs::try_exists(path).await? {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a collection atomically
async fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(items)?;
    fs::write(&temp_path, json).await?;
    fs::rename(&temp_path, path).await?;
    Ok(())
}
