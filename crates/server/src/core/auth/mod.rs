//! Authentication Module
//!
//! Password hashing with bcrypt and stateless access tokens (HS256 JWT).
//! Users themselves live in the document store.

pub mod handlers;
pub mod middleware;

use anyhow::{Context, Result};
use bcrypt::{hash, verify};
use bloglist_core::{UserId, UserRecord};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::config::ServerConfig;
use crate::core::store::JsonBlogStore;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Canonical user id
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<UserId> {
        UserId::parse(&self.sub).map_err(|e| anyhow::anyhow!("Bad subject in token: {}", e))
    }
}

/// Auth manager handles hashing and token issuance
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
    bcrypt_cost: u32,
}

impl AuthManager {
    pub fn new(config: &ServerConfig) -> Self {
        info!("[Auth] Tokens valid for {}h", config.token_ttl_hours);
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl: Duration::hours(config.token_ttl_hours),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String> {
        hash(password, self.bcrypt_cost).context("Failed to hash password")
    }

    /// Issue a signed token for `user`
    pub fn issue_token(&self, user: &UserRecord) -> Result<String> {
        let expires_at = Utc::now()
            .checked_add_signed(self.token_ttl)
            .context("Token expiry out of range")?;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            exp: expires_at.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("Failed to sign token")
    }

    /// Validate a token's signature and expiry
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .context("Invalid or expired token")?;
        Ok(data.claims)
    }

    /// Check credentials against the store and issue a token
    pub async fn login(
        &self,
        store: &JsonBlogStore,
        username: &str,
        password: &str,
    ) -> Result<(UserRecord, String)> {
        let user = store
            .find_user_by_username(username)
            .await
            .ok_or_else(|| anyhow::anyhow!("Invalid username or password"))?;

        let valid = verify(password, &user.password_hash).context("Failed to verify password")?;
        if !valid {
            warn!("[Auth] Failed login attempt for {}", username);
            return Err(anyhow::anyhow!("Invalid username or password"));
        }

        let token = self.issue_token(&user)?;
        info!("[Auth] User logged in: {}", user.username);

        Ok((user, token))
    }
}
