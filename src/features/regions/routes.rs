use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/status", get(handlers::get_catalog_status))
        // Province routes
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route("/api/regions/provinces/{id}", get(handlers::get_province))
        .route(
            "/api/regions/provinces/{id}/regencies",
            get(handlers::list_regencies_by_province),
        )
        // Regency routes
        .route("/api/regions/regencies/{id}", get(handlers::get_regency))
        .route(
            "/api/regions/regencies/{id}/districts",
            get(handlers::list_districts_by_regency),
        )
        // District routes
        .route("/api/regions/districts/{id}", get(handlers::get_district))
        .with_state(service)
}
