//! Request and response bodies shared by the server and the client.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 3;

/// Body of blog creation and full replacement. Everything is optional on
/// the wire so missing fields surface as validation errors, not as
/// deserialization rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

/// A [`NewBlog`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

impl NewBlog {
    pub fn new(title: impl Into<String>, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            url: Some(url.into()),
            likes: None,
        }
    }

    pub fn with_likes(mut self, likes: i64) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Title and url are required; likes default to 0.
    pub fn validate(&self) -> Result<ValidBlog> {
        let title = required(&self.title, "title")?;
        let url = required(&self.url, "url")?;
        let likes = validate_likes(self.likes.unwrap_or(0))?;

        Ok(ValidBlog {
            title,
            author: self.author.clone().unwrap_or_default(),
            url,
            likes,
        })
    }
}

/// Body of a likes-only update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesUpdate {
    pub likes: i64,
}

impl LikesUpdate {
    pub fn validate(&self) -> Result<u64> {
        validate_likes(self.likes)
    }
}

/// Body of user registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A [`NewUser`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub username: String,
    pub name: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            name: Some(name.into()),
            password: Some(password.into()),
        }
    }

    /// Password is checked first, then the username.
    pub fn validate(&self) -> Result<ValidUser> {
        let password = match &self.password {
            Some(p) if p.chars().count() >= MIN_PASSWORD_LEN => p.clone(),
            _ => return Err(CoreError::validation("Invalid password")),
        };

        let username = required(&self.username, "username")?;
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(CoreError::validation(format!(
                "username must be at least {} characters long",
                MIN_USERNAME_LEN
            )));
        }

        Ok(ValidUser {
            username,
            name: self.name.clone().unwrap_or_default(),
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn required(value: &Option<String>, field: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::validation(format!("{} is required", field))),
    }
}

fn validate_likes(likes: i64) -> Result<u64> {
    u64::try_from(likes).map_err(|_| CoreError::validation("likes must not be negative"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_default_to_zero() {
        let blog = NewBlog::new("New Blog", "John Doe", "https://www.new-blog.com")
            .validate()
            .unwrap();
        assert_eq!(blog.likes, 0);
    }

    #[test]
    fn test_missing_title_or_url() {
        let no_title = NewBlog {
            title: None,
            ..NewBlog::new("", "John Doe", "https://www.new-blog.com")
        };
        assert_eq!(
            no_title.validate().unwrap_err(),
            CoreError::validation("title is required")
        );

        let blank_url = NewBlog::new("New Blog", "John Doe", "   ");
        assert_eq!(
            blank_url.validate().unwrap_err(),
            CoreError::validation("url is required")
        );
    }

    #[test]
    fn test_negative_likes_rejected() {
        let blog = NewBlog::new("T", "A", "http://x").with_likes(-1);
        assert!(matches!(blog.validate(), Err(CoreError::Validation(_))));
        assert!(LikesUpdate { likes: -5 }.validate().is_err());
        assert_eq!(LikesUpdate { likes: 100 }.validate().unwrap(), 100);
    }

    #[test]
    fn test_user_validation() {
        assert!(NewUser::new("user1", "John Doe", "secure").validate().is_ok());

        let short_pw = NewUser::new("user1", "John Doe", "pw");
        assert_eq!(
            short_pw.validate().unwrap_err(),
            CoreError::validation("Invalid password")
        );

        let no_pw = NewUser {
            password: None,
            ..NewUser::new("user1", "John Doe", "")
        };
        assert!(no_pw.validate().is_err());

        let short_name = NewUser::new("JD", "John Doe", "secure");
        assert!(matches!(short_name.validate(), Err(CoreError::Validation(_))));

        let no_name = NewUser {
            username: None,
            ..NewUser::new("", "John Doe", "secure")
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_new_blog_omits_absent_fields() {
        let json = serde_json::to_value(NewBlog::new("T", "A", "http://x")).unwrap();
        assert!(json.get("likes").is_none());
    }
}
