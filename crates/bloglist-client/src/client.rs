//! Blog list API client.

use crate::config::ClientConfig;
use crate::credential::{Credential, Session};
use crate::error::{ClientError, Result};
use bloglist_core::api::{ErrorResponse, LikesUpdate, LoginRequest, LoginResponse, NewBlog, NewUser};
use bloglist_core::{BlogId, BlogRecord, BlogStats, BlogView, UserView};
use reqwest::{header, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct BlogClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl BlogClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connection_timeout_secs))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET /api/blogs
    pub async fn get_all(&self) -> Result<Vec<BlogView>> {
        self.send(self.http.get(self.url("/api/blogs"))).await
    }

    /// GET /api/blogs/{id}
    pub async fn get(&self, id: BlogId) -> Result<BlogView> {
        self.send(self.http.get(self.blog_url(id))).await
    }

    /// POST /api/blogs
    pub async fn create(&self, credential: &Credential, blog: &NewBlog) -> Result<BlogRecord> {
        let req = self.http.post(self.url("/api/blogs")).json(blog);
        self.send(authorized(req, credential)).await
    }

    /// PUT /api/blogs/{id}, full replacement by the owner
    pub async fn update(
        &self,
        credential: &Credential,
        id: BlogId,
        blog: &NewBlog,
    ) -> Result<BlogView> {
        let req = self.http.put(self.blog_url(id)).json(blog);
        self.send(authorized(req, credential)).await
    }

    /// PUT /api/blogs/{id}/likes
    pub async fn like(&self, id: BlogId, likes: i64) -> Result<BlogView> {
        let url = format!("{}/likes", self.blog_url(id));
        self.send(self.http.put(url).json(&LikesUpdate { likes }))
            .await
    }

    /// DELETE /api/blogs/{id}
    pub async fn remove(&self, credential: &Credential, id: BlogId) -> Result<()> {
        let req = authorized(self.http.delete(self.blog_url(id)), credential);
        self.execute(req).await?;
        Ok(())
    }

    /// GET /api/users
    pub async fn users(&self) -> Result<Vec<UserView>> {
        self.send(self.http.get(self.url("/api/users"))).await
    }

    /// POST /api/users
    pub async fn register(&self, user: &NewUser) -> Result<UserView> {
        self.send(self.http.post(self.url("/api/users")).json(user))
            .await
    }

    /// POST /api/login
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session> {
        let res: LoginResponse = self
            .send(self.http.post(self.url("/api/login")).json(credentials))
            .await?;
        Ok(Session::from(res))
    }

    /// GET /api/stats
    pub async fn stats(&self) -> Result<BlogStats> {
        self.send(self.http.get(self.url("/api/stats"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn blog_url(&self, id: BlogId) -> String {
        self.url(&format!("/api/blogs/{}", id))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let res = self.execute(req).await?;
        Ok(res.json::<T>().await?)
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Response> {
        let res = req.send().await?;
        let status = res.status();

        if self.config.enable_logging {
            debug!("{} {}", status, res.url());
        }

        if status.is_success() {
            return Ok(res);
        }

        let message = match res.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ClientError::from_status(status, message))
    }
}

fn authorized(req: RequestBuilder, credential: &Credential) -> RequestBuilder {
    req.header(header::AUTHORIZATION, credential.header_value())
}
