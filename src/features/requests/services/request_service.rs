use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::requests::dtos::{CreateRequestDto, MatchedVolunteerDto, RequestViewDto};
use crate::features::requests::models::{AidRequest, RequestStatus, Urgency};
use crate::store::{AssignmentFilter, EntityStore};

/// Creates requests and composes their read views from live assignment data.
pub struct RequestService {
    store: Arc<dyn EntityStore>,
}

impl RequestService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Create a new aid request. Validation of required fields happens at the
    /// handler boundary; this normalizes and persists.
    pub async fn create(&self, dto: CreateRequestDto) -> Result<RequestViewDto> {
        let now = Utc::now();
        let request = AidRequest {
            id: Uuid::now_v7(),
            title: dto.title.trim().to_string(),
            description: dto
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            location: dto.location.trim().to_string(),
            skills: dto.skills,
            urgency: dto.urgency.unwrap_or(Urgency::Medium),
            status: RequestStatus::Active,
            volunteers_needed: dto.volunteers_needed.unwrap_or(1),
            organization_name: dto
                .organization_name
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty()),
            created_at: now,
            updated_at: now,
        };

        let request = self.store.insert_request(request).await?;
        tracing::info!("New request created: {} ({})", request.title, request.id);

        self.present(&request).await
    }

    /// All requests as enriched views, newest first
    pub async fn list(&self) -> Result<Vec<RequestViewDto>> {
        let requests = self.store.list_requests().await?;

        let mut views = Vec::with_capacity(requests.len());
        for request in &requests {
            views.push(self.present(request).await?);
        }
        Ok(views)
    }

    /// Compose the display state of a request by joining its assignments with
    /// the assigned volunteers. `matches` here reflects actual assignments,
    /// not the skill matcher's candidate pool; `confirmed` is always a subset
    /// of `matched`.
    pub async fn present(&self, request: &AidRequest) -> Result<RequestViewDto> {
        let assignments = self
            .store
            .list_assignments(AssignmentFilter::for_request(request.id))
            .await?;

        let matched = assignments.len() as i64;
        let confirmed = assignments
            .iter()
            .filter(|a| a.status.is_confirmed())
            .count() as i64;

        let mut matches = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            // A dangling volunteer reference (deleted out-of-band) still
            // counts toward `matched` but produces no summary entry
            if let Some(volunteer) = self.store.get_volunteer(assignment.volunteer_id).await? {
                matches.push(MatchedVolunteerDto::from(&volunteer));
            }
        }

        Ok(RequestViewDto::from_parts(request, matched, confirmed, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::requests::models::AssignmentStatus;
    use crate::features::requests::services::AssignmentService;
    use crate::features::tasks::services::TaskService;
    use crate::shared::test_helpers::{request_with_skills, volunteer_with_skills};
    use crate::store::MemoryStore;

    fn create_dto(title: &str) -> CreateRequestDto {
        CreateRequestDto {
            title: title.to_string(),
            description: None,
            location: "Sector 4".to_string(),
            skills: vec!["Medical".to_string()],
            urgency: None,
            volunteers_needed: None,
            organization_name: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let store = Arc::new(MemoryStore::new());
        let service = RequestService::new(store);

        let view = service.create(create_dto("  Flood relief  ")).await.unwrap();

        assert_eq!(view.title, "Flood relief");
        assert_eq!(view.urgency, Urgency::Medium);
        assert_eq!(view.status, RequestStatus::Active);
        assert_eq!(view.volunteers.needed, 1);
        assert_eq!(view.volunteers.matched, 0);
        assert_eq!(view.volunteers.confirmed, 0);
        assert!(view.matches.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let store = Arc::new(MemoryStore::new());
        let service = RequestService::new(store);

        service.create(create_dto("First")).await.unwrap();
        service.create(create_dto("Second")).await.unwrap();

        let views = service.list().await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].title, "Second");
        assert_eq!(views[1].title, "First");
    }

    #[tokio::test]
    async fn test_counts_track_assignment_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let request_service = RequestService::new(store.clone() as Arc<dyn EntityStore>);
        let assignment_service = AssignmentService::new(store.clone() as Arc<dyn EntityStore>);
        let task_service = TaskService::new(store.clone() as Arc<dyn EntityStore>);

        let request = request_with_skills(&["Medical", "Setup"]);
        let a = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical"]);
        let b = volunteer_with_skills("Volunteer B", "b@example.com", &["Setup"]);
        store.insert_request(request.clone()).await.unwrap();
        store.insert_volunteer(a.clone()).await.unwrap();
        store.insert_volunteer(b.clone()).await.unwrap();

        // both assigned: matched 2, confirmed 0
        let result = assignment_service
            .assign(request.id, &[a.id, b.id])
            .await
            .unwrap();
        assert_eq!(result.assignments_created, 2);

        let view = request_service.present(&request).await.unwrap();
        assert_eq!(view.volunteers.matched, 2);
        assert_eq!(view.volunteers.confirmed, 0);
        assert_eq!(view.matches.len(), 2);

        // one acceptance: confirmed 1, matched still 2
        let assignments = store
            .list_assignments(AssignmentFilter::for_request(request.id))
            .await
            .unwrap();
        let accepted = task_service.accept(assignments[0].id).await.unwrap();
        assert_eq!(accepted.status, AssignmentStatus::Accepted);

        let view = request_service.present(&request).await.unwrap();
        assert_eq!(view.volunteers.matched, 2);
        assert_eq!(view.volunteers.confirmed, 1);
        assert!(view.volunteers.confirmed <= view.volunteers.matched);
    }
}
