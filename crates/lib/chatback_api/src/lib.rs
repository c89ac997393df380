//! # chatback_api
//!
//! HTTP API library for Chatback.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::message;

/// Route for the chat message endpoint.
pub const POST_MESSAGE: &str = "/message";

/// Builds the Axum router with all routes.
///
/// The router carries no shared state; every request is handled on its own.
/// Request bodies are not size-limited.
pub fn router(config: &ApiConfig) -> Router {
    Router::new()
        .route(POST_MESSAGE, post(message::message_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer(&config.allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(origin = %o, "ignoring invalid CORS origin: {e}");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
