//! HTTP transport: axum router around [`validate`](crate::core::validate)
//! and [`Renderer::render`].

mod config;
mod error;
mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::core::RenderConfig;
use crate::pdf::Renderer;

pub use config::{DEFAULT_BIND_ADDR, ServerConfig};
pub use error::ApiError;

/// Shared, read-only state of the service.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Arc::new(Renderer::new(config)),
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-invoice", post(routes::generate_invoice))
        .route("/health", get(routes::health))
        .with_state(state)
}
