//! Core Router
//!
//! Wires every route, the token middleware and the HTTP layers.

use crate::blogs;
use crate::core::auth::handlers as auth_handlers;
use crate::core::auth::middleware::mw_extract_token;
use crate::core::error::Error;
use crate::core::testing;
use crate::core::AppState;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        // Blog routes
        .route("/api/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route("/api/blogs/{id}/likes", put(blogs::update_likes))
        .route("/api/stats", get(blogs::blog_stats))
        // User and auth routes
        .route(
            "/api/users",
            get(auth_handlers::list_users).post(auth_handlers::create_user),
        )
        .route("/api/login", post(auth_handlers::login))
        // Health check
        .route("/health", get(health_check));

    if state.config.testing_mode {
        router = router.route("/api/testing/reset", post(testing::reset));
    }

    router
        .fallback(unknown_endpoint)
        .layer(middleware::from_fn_with_state(state.clone(), mw_extract_token))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK - Blog List Server"
}

async fn unknown_endpoint() -> Error {
    Error::UnknownEndpoint
}
