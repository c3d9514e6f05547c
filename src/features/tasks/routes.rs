use std::sync::Arc;

use axum::{routing::put, Router};

use crate::features::tasks::handlers;
use crate::features::tasks::services::TaskService;

/// Create routes for the tasks feature
pub fn routes(service: Arc<TaskService>) -> Router {
    Router::new()
        .route("/api/tasks/{id}/accept", put(handlers::accept_task))
        .with_state(service)
}
