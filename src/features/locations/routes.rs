use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/insert", post(handlers::insert_locations))
        .route("/data", get(handlers::list_locations))
        .route(
            "/data/by-dati2code",
            post(handlers::list_locations_by_dati2_code),
        )
        .with_state(service)
}
