use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Create routes for the contact feature
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contact",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .with_state(service)
}
