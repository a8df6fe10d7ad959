use super::handlers::{admin, comments, descriptor};
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    let methods = || [Method::GET, Method::POST, Method::PATCH, Method::DELETE];

    let cors = if allowed_origins == "*" {
        CorsLayer::new()
            .allow_methods(methods())
            .allow_origin(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<HeaderValue>().ok())
            .collect();

        if origins.is_empty() {
            tracing::warn!("CORS config is invalid or empty, falling back to allow ANY.");
            CorsLayer::new()
                .allow_methods(methods())
                .allow_origin(Any)
                .allow_headers(Any)
        } else {
            tracing::info!("CORS enabled for origins: {:?}", origins);
            CorsLayer::new()
                .allow_methods(methods())
                .allow_origin(origins)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route(
            "/api/comments",
            get(comments::list_comments).post(comments::post_comment),
        )
        .route(
            "/api/comments/:id",
            get(comments::get_comment).delete(admin::delete_comment),
        )
        .route("/api/comments/:id/approval", patch(comments::patch_approval))
        .route("/api/descriptor", get(descriptor::get_descriptor))
        .layer(cors)
        .with_state(state)
}
