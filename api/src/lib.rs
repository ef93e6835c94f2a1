pub mod answers;
pub mod auth;
pub mod config;
pub mod error;
pub mod hackrx_request;
pub mod hackrx_response;
pub mod handlers;

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub use config::Settings;
pub use error::HandlerError;

/// Builds the router. The run handler accepts every method so it can answer
/// non-POST requests with its own 405.
pub fn app(settings: Settings) -> Router {
    let status_cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(handlers::status).layer(status_cors))
        .route("/api/v1/hackrx/run", any(handlers::hackrx_run))
        .route("/hackrx/run", any(handlers::hackrx_run))
        .with_state(Arc::new(settings))
}
