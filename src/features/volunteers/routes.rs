use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::volunteers::handlers;
use crate::features::volunteers::services::VolunteerService;

/// Create routes for the volunteers feature
pub fn routes(service: Arc<VolunteerService>) -> Router {
    Router::new()
        .route("/api/volunteers/register", post(handlers::register_volunteer))
        .route("/api/volunteers", get(handlers::list_volunteers))
        .route("/api/volunteers/{id}", get(handlers::get_volunteer))
        .route("/api/volunteers/{id}/stats", get(handlers::get_volunteer_stats))
        .route("/api/volunteers/{id}/tasks", get(handlers::get_volunteer_tasks))
        .with_state(service)
}
