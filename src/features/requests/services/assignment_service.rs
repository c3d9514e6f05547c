use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::requests::dtos::AssignmentResultDto;
use crate::features::requests::models::Assignment;
use crate::store::EntityStore;

/// Creates assignments linking volunteers to a request.
pub struct AssignmentService {
    store: Arc<dyn EntityStore>,
}

impl AssignmentService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Assigns the given volunteers to a request.
    ///
    /// The batch is resilient by design: unknown volunteer ids are skipped
    /// without failing the call (the candidate list the caller assigned from
    /// may be stale), and an already-assigned pair is an idempotent no-op.
    /// The returned created count is the only signal of partial success.
    pub async fn assign(
        &self,
        request_id: Uuid,
        volunteer_ids: &[Uuid],
    ) -> Result<AssignmentResultDto> {
        if volunteer_ids.is_empty() {
            return Err(AppError::BadRequest(
                "volunteerIds array is required".to_string(),
            ));
        }

        if self.store.get_request(request_id).await?.is_none() {
            return Err(AppError::NotFound("Request not found".to_string()));
        }

        let now = Utc::now();
        let mut created = 0usize;

        for &volunteer_id in volunteer_ids {
            if self.store.get_volunteer(volunteer_id).await?.is_none() {
                tracing::debug!(
                    "Skipping unknown volunteer {} for request {}",
                    volunteer_id,
                    request_id
                );
                continue;
            }

            let assignment = Assignment::new(request_id, volunteer_id, now);
            if self.store.insert_assignment(assignment).await? {
                created += 1;
            }
        }

        tracing::info!("Assigned {} volunteers to request {}", created, request_id);

        Ok(AssignmentResultDto {
            request_id,
            assignments_created: created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::requests::models::AssignmentStatus;
    use crate::shared::test_helpers::{request_with_skills, volunteer_with_skills};
    use crate::store::{AssignmentFilter, MemoryStore};

    async fn setup() -> (Arc<MemoryStore>, AssignmentService) {
        let store = Arc::new(MemoryStore::new());
        let service = AssignmentService::new(store.clone() as Arc<dyn EntityStore>);
        (store, service)
    }

    #[tokio::test]
    async fn test_assign_empty_volunteer_list_is_invalid() {
        let (store, service) = setup().await;
        let request = request_with_skills(&["Medical"]);
        store.insert_request(request.clone()).await.unwrap();

        let err = service.assign(request.id, &[]).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_assign_unknown_request_fails_even_with_valid_volunteer() {
        let (store, service) = setup().await;
        let volunteer = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        store.insert_volunteer(volunteer.clone()).await.unwrap();

        let err = service
            .assign(Uuid::now_v7(), &[volunteer.id])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_assign_creates_pending_assignments() {
        let (store, service) = setup().await;
        let request = request_with_skills(&["Medical"]);
        let a = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        let b = volunteer_with_skills("Volunteer B", "b@example.com", &["Driving"]);
        store.insert_request(request.clone()).await.unwrap();
        store.insert_volunteer(a.clone()).await.unwrap();
        store.insert_volunteer(b.clone()).await.unwrap();

        let result = service.assign(request.id, &[a.id, b.id]).await.unwrap();
        assert_eq!(result.assignments_created, 2);

        let assignments = store
            .list_assignments(AssignmentFilter::for_request(request.id))
            .await
            .unwrap();
        assert_eq!(assignments.len(), 2);
        assert!(assignments
            .iter()
            .all(|a| a.status == AssignmentStatus::Pending && a.accepted_at.is_none()));
    }

    #[tokio::test]
    async fn test_assign_is_idempotent() {
        let (store, service) = setup().await;
        let request = request_with_skills(&["Medical"]);
        let volunteer = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        store.insert_request(request.clone()).await.unwrap();
        store.insert_volunteer(volunteer.clone()).await.unwrap();

        let first = service.assign(request.id, &[volunteer.id]).await.unwrap();
        assert_eq!(first.assignments_created, 1);

        // retry creates nothing new
        let second = service.assign(request.id, &[volunteer.id]).await.unwrap();
        assert_eq!(second.assignments_created, 0);

        let assignments = store
            .list_assignments(AssignmentFilter::for_request(request.id))
            .await
            .unwrap();
        assert_eq!(assignments.len(), 1);
    }

    #[tokio::test]
    async fn test_assign_skips_unknown_volunteers_silently() {
        let (store, service) = setup().await;
        let request = request_with_skills(&["Medical"]);
        let volunteer = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        store.insert_request(request.clone()).await.unwrap();
        store.insert_volunteer(volunteer.clone()).await.unwrap();

        let result = service
            .assign(request.id, &[volunteer.id, Uuid::now_v7()])
            .await
            .unwrap();

        // partial success is reported only through the count
        assert_eq!(result.assignments_created, 1);
    }
}
