pub mod api;
pub mod config;
pub mod errors;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use mergington_core::ActivityDirectory;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use config::ServerConfig;
pub use errors::{ServerError, ServerResult};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(directory: ActivityDirectory, config: ServerConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            config,
        }
    }
}

/// Builds the full HTTP surface over `state`.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(api::root))
        .route("/activities", get(api::list_activities))
        .route("/activities/:activity_name/signup", post(api::signup))
        .route("/activities/:activity_name/unregister", delete(api::unregister))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
