use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::selection::handlers;
use crate::features::selection::services::SelectionService;

/// Create routes for the selection feature
pub fn routes(service: Arc<SelectionService>) -> Router {
    Router::new()
        .route(
            "/api/selection",
            get(handlers::get_selection).delete(handlers::reset_selection),
        )
        .route("/api/selection/province", put(handlers::update_province))
        .route("/api/selection/regency", put(handlers::update_regency))
        .route("/api/selection/district", put(handlers::update_district))
        .with_state(service)
}
