use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::requests::models::AssignmentStatus;
use crate::features::tasks::dtos::AcceptedTaskDto;
use crate::store::EntityStore;

/// Drives the volunteer-facing side of an assignment's lifecycle.
pub struct TaskService {
    store: Arc<dyn EntityStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Mark an assignment as accepted and stamp accepted_at.
    ///
    /// No guard on the prior status: re-accepting an accepted or even a
    /// completed assignment simply restamps it. Callers rely on this being
    /// unconditional.
    pub async fn accept(&self, assignment_id: Uuid) -> Result<AcceptedTaskDto> {
        let now = Utc::now();
        let updated = self
            .store
            .update_assignment_status(assignment_id, AssignmentStatus::Accepted, now)
            .await?
            .ok_or_else(|| AppError::NotFound("Task/Assignment not found".to_string()))?;

        tracing::info!("Task {} accepted", updated.id);

        Ok(AcceptedTaskDto {
            id: updated.id,
            status: updated.status,
            accepted_at: updated.accepted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::requests::models::Assignment;
    use crate::shared::test_helpers::{request_with_skills, volunteer_with_skills};
    use crate::store::MemoryStore;

    async fn store_with_assignment() -> (Arc<MemoryStore>, Assignment) {
        let store = Arc::new(MemoryStore::new());
        let request = request_with_skills(&["Medical"]);
        let volunteer = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        store.insert_request(request.clone()).await.unwrap();
        store.insert_volunteer(volunteer.clone()).await.unwrap();

        let assignment = Assignment::new(request.id, volunteer.id, Utc::now());
        assert!(store.insert_assignment(assignment.clone()).await.unwrap());
        (store, assignment)
    }

    #[tokio::test]
    async fn test_accept_unknown_assignment_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = TaskService::new(store);

        let err = service.accept(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_accept_sets_status_and_timestamp() {
        let (store, assignment) = store_with_assignment().await;
        let service = TaskService::new(store.clone() as Arc<dyn EntityStore>);

        let accepted = service.accept(assignment.id).await.unwrap();
        assert_eq!(accepted.status, AssignmentStatus::Accepted);
        assert!(accepted.accepted_at.is_some());

        let stored = store.get_assignment(assignment.id).await.unwrap().unwrap();
        assert_eq!(stored.status, AssignmentStatus::Accepted);
    }

    #[tokio::test]
    async fn test_double_accept_is_allowed_and_restamps() {
        // Documents current permissive behavior: accepting twice succeeds
        // and refreshes accepted_at rather than erroring
        let (store, assignment) = store_with_assignment().await;
        let service = TaskService::new(store.clone() as Arc<dyn EntityStore>);

        let first = service.accept(assignment.id).await.unwrap();
        let second = service.accept(assignment.id).await.unwrap();

        assert_eq!(second.status, AssignmentStatus::Accepted);
        assert!(second.accepted_at.unwrap() >= first.accepted_at.unwrap());
    }
}
