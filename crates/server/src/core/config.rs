//! Blog server configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::auth::AuthManager;
use crate::core::store::JsonBlogStore;

/// Configuration for the blog list server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Directory holding the JSON collections
    pub data_dir: PathBuf,
    /// Port to listen on
    pub port: u16,
    /// Secret used to sign access tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub token_ttl_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Expose the testing reset endpoint
    pub testing_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::var("BLOGLIST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("bloglist_data")),
            port: env_parse("PORT").unwrap_or(3003),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "bloglist-development-secret".to_string()),
            token_ttl_hours: env_parse("TOKEN_TTL_HOURS").unwrap_or(24),
            bcrypt_cost: env_parse("BCRYPT_COST").unwrap_or(10),
            testing_mode: std::env::var("BLOGLIST_ENV")
                .map(|v| v == "test")
                .unwrap_or(false),
        }
    }
}

impl ServerConfig {
    /// Create config with a custom data directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn blogs_path(&self) -> PathBuf {
        self.data_dir.join("blogs.json")
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    /// Ensure all directories exist
    pub async fn ensure_dirs(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// App state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub store: Arc<JsonBlogStore>,
    pub auth: Arc<AuthManager>,
}

impl AppState {
    /// Open the store and set up auth from `config`.
    pub async fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let store = Arc::new(JsonBlogStore::new(config.clone()).await?);
        let auth = Arc::new(AuthManager::new(&config));
        Ok(Self {
            config,
            store,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_dir_paths() {
        let config = ServerConfig::with_base_dir("/tmp/bloglist");
        assert_eq!(config.blogs_path(), PathBuf::from("/tmp/bloglist/blogs.json"));
        assert_eq!(config.users_path(), PathBuf::from("/tmp/bloglist/users.json"));
    }
}
