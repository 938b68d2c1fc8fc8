//! Stored records and API views.

use crate::ids::{BlogId, UserId};
use serde::{Deserialize, Serialize};

/// A stored blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub id: BlogId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    /// Owning user. Called `user` on the wire.
    #[serde(rename = "user", default)]
    pub owner: Option<UserId>,
}

impl BlogRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: u64,
        owner: Option<UserId>,
    ) -> Self {
        Self {
            id: BlogId::new(),
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
            owner,
        }
    }

    pub fn summary(&self) -> BlogSummary {
        BlogSummary {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
        }
    }

    /// View with the owner populated from `owner`, when known.
    pub fn view(&self, owner: Option<&UserRecord>) -> BlogView {
        BlogView {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
            user: owner.map(UserRecord::summary),
        }
    }
}

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub password_hash: String,
    /// Authored blogs, oldest first.
    #[serde(default)]
    pub blogs: Vec<BlogId>,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            blogs: Vec::new(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }

    /// Public view. `lookup` resolves authored blog ids; ids it cannot
    /// resolve are left out.
    pub fn view<'a, F>(&self, lookup: F) -> UserView
    where
        F: Fn(&BlogId) -> Option<&'a BlogRecord>,
    {
        UserView {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            blogs: self
                .blogs
                .iter()
                .filter_map(|id| lookup(id).map(BlogRecord::summary))
                .collect(),
        }
    }
}

/// Owner info embedded in a [`BlogView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

/// Blog info embedded in a [`UserView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: BlogId,
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Blog as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogView {
    pub id: BlogId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub user: Option<UserSummary>,
}

/// User as served by the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogSummary>,
}
