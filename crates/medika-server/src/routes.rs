//! Router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/hospitals", post(handlers::hospital::create))
        .route("/api/staff/create", post(handlers::staff::create))
        .route("/api/staff/login", post(handlers::staff::login))
        .route("/api/patients/search", post(handlers::patient::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
