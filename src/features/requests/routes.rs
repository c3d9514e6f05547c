use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::requests::handlers::{self, RequestState};
use crate::features::requests::services::{AssignmentService, MatchingService, RequestService};

/// Create routes for the requests feature
pub fn routes(
    request_service: Arc<RequestService>,
    matching_service: Arc<MatchingService>,
    assignment_service: Arc<AssignmentService>,
) -> Router {
    let state = RequestState {
        request_service,
        matching_service,
        assignment_service,
    };

    Router::new()
        .route(
            "/api/requests",
            get(handlers::list_requests).post(handlers::create_request),
        )
        .route("/api/requests/{id}/matches", get(handlers::get_matches))
        .route("/api/requests/{id}/assign", post(handlers::assign_volunteers))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::shared::test_helpers::volunteer_with_skills;
    use crate::store::{EntityStore, MemoryStore};

    fn server_with_store(store: Arc<MemoryStore>) -> TestServer {
        let entity_store = store as Arc<dyn EntityStore>;
        let app = routes(
            Arc::new(RequestService::new(Arc::clone(&entity_store))),
            Arc::new(MatchingService::new(Arc::clone(&entity_store))),
            Arc::new(AssignmentService::new(entity_store)),
        );
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_requests_over_http() {
        let store = Arc::new(MemoryStore::new());
        let server = server_with_store(store.clone());

        let response = server
            .post("/api/requests")
            .json(&json!({
                "title": "Flood relief",
                "location": "Sector 4",
                "skills": ["Medical", "Setup"],
                "urgency": "high"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["volunteers"]["matched"], json!(0));

        let list: serde_json::Value = server.get("/api/requests").await.json();
        assert_eq!(list["meta"]["total"], json!(1));
    }

    #[tokio::test]
    async fn test_create_request_missing_fields_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let server = server_with_store(store);

        let response = server
            .post("/api/requests")
            .json(&json!({
                "title": "No location or skills",
                "location": "",
                "skills": []
            }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_create_request_whitespace_only_title_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let server = server_with_store(store);

        // the title is trimmed before persistence, so a whitespace-only value
        // must fail validation instead of being stored as an empty string
        let response = server
            .post("/api/requests")
            .json(&json!({
                "title": "   ",
                "location": "Sector 4",
                "skills": ["Medical"]
            }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let list: serde_json::Value = server.get("/api/requests").await.json();
        assert_eq!(list["meta"]["total"], json!(0));
    }

    #[tokio::test]
    async fn test_assign_endpoint_error_statuses() {
        let store = Arc::new(MemoryStore::new());
        let volunteer = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        store.insert_volunteer(volunteer.clone()).await.unwrap();
        let server = server_with_store(store);

        // unknown request id is 404 even with a valid volunteer
        let response = server
            .post(&format!("/api/requests/{}/assign", Uuid::now_v7()))
            .json(&json!({ "volunteerIds": [volunteer.id] }))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        // unknown request with empty ids still fails on the empty list first
        let response = server
            .post(&format!("/api/requests/{}/assign", Uuid::now_v7()))
            .json(&json!({ "volunteerIds": [] }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_matches_endpoint_unknown_request() {
        let store = Arc::new(MemoryStore::new());
        let server = server_with_store(store);

        let response = server
            .get(&format!("/api/requests/{}/matches", Uuid::now_v7()))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
