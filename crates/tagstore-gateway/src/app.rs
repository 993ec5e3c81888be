use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_handler, create_record_handler, health_handler, index_handler, stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/api", get(api_handler))
            .route("/api/records", post(create_record_handler))
            .route("/api/stats", get(stats_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
