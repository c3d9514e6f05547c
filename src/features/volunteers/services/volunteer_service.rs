use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::volunteers::dtos::{
    RegisterVolunteerDto, RegisteredVolunteerDto, VolunteerResponseDto, VolunteerStatsDto,
    VolunteerTaskDto,
};
use crate::features::volunteers::models::{Volunteer, VolunteerStatus};
use crate::shared::constants::DEFAULT_MAX_DISTANCE_KM;
use crate::store::{AssignmentFilter, EntityStore};

/// Service for volunteer registration and read-only projections.
pub struct VolunteerService {
    store: Arc<dyn EntityStore>,
}

impl VolunteerService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Register a new volunteer from an onboarding submission.
    ///
    /// Field formats are validated at the handler boundary; this normalizes
    /// (trimmed fields, lowercased email), rejects duplicate emails with
    /// `Conflict`, and persists the volunteer as `Pending` until an external
    /// verification process advances the status.
    pub async fn register(&self, dto: RegisterVolunteerDto) -> Result<RegisteredVolunteerDto> {
        let email = dto.personal_info.email.trim().to_lowercase();

        if self.store.find_volunteer_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "A volunteer with this email is already registered".to_string(),
            ));
        }

        let now = Utc::now();
        let volunteer = Volunteer {
            id: Uuid::now_v7(),
            full_name: dto.personal_info.full_name.trim().to_string(),
            email,
            phone: dto.personal_info.phone.trim().to_string(),
            city: trimmed(dto.personal_info.city),
            state: trimmed(dto.personal_info.state),
            pincode: trimmed(dto.personal_info.pincode),
            emergency_contact_name: trimmed(dto.personal_info.emergency_contact_name),
            emergency_contact_phone: trimmed(dto.personal_info.emergency_contact_phone),
            skills: dto.skills.selected_skills,
            license_number: trimmed(dto.skills.license_number),
            status: VolunteerStatus::Pending,
            rating: 0.0,
            tasks_completed: 0,
            hours_served: 0,
            max_distance_km: dto
                .availability
                .max_distance
                .unwrap_or(DEFAULT_MAX_DISTANCE_KM),
            available_days: dto.availability.selected_days,
            emergency_types: dto.availability.selected_emergencies,
            notifications: dto.availability.notifications.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let volunteer = self.store.insert_volunteer(volunteer).await?;
        tracing::info!(
            "New volunteer registration: {} ({})",
            volunteer.full_name,
            volunteer.email
        );

        Ok(volunteer.into())
    }

    /// All volunteers, newest registration first
    pub async fn list(&self) -> Result<Vec<VolunteerResponseDto>> {
        let volunteers = self.store.list_volunteers().await?;
        Ok(volunteers.into_iter().map(|v| v.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<VolunteerResponseDto> {
        let volunteer = self.require(id).await?;
        Ok(volunteer.into())
    }

    /// Read-only service statistics, maintained by external task-completion flows
    pub async fn stats(&self, id: Uuid) -> Result<VolunteerStatsDto> {
        let volunteer = self.require(id).await?;
        Ok(VolunteerStatsDto::from(&volunteer))
    }

    /// The volunteer's assignments joined with their requests, newest first
    pub async fn tasks(&self, id: Uuid) -> Result<Vec<VolunteerTaskDto>> {
        self.require(id).await?;

        let mut assignments = self
            .store
            .list_assignments(AssignmentFilter::for_volunteer(id))
            .await?;
        assignments.sort_by(|a, b| b.assigned_at.cmp(&a.assigned_at));

        let mut tasks = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            // Assignments pointing at a removed request are dropped from the
            // task list rather than failing the whole projection
            if let Some(request) = self.store.get_request(assignment.request_id).await? {
                tasks.push(VolunteerTaskDto::from_parts(assignment, &request));
            }
        }
        Ok(tasks)
    }

    async fn require(&self, id: Uuid) -> Result<Volunteer> {
        self.store
            .get_volunteer(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Volunteer not found".to_string()))
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::requests::models::Assignment;
    use crate::features::volunteers::dtos::{AvailabilityDto, PersonalInfoDto, SkillsDto};
    use crate::shared::test_helpers::request_with_skills;
    use crate::store::MemoryStore;

    fn registration(email: &str) -> RegisterVolunteerDto {
        RegisterVolunteerDto {
            personal_info: PersonalInfoDto {
                full_name: "  Amit Kumar  ".to_string(),
                email: email.to_string(),
                phone: "+91 98765 12345".to_string(),
                city: Some("Delhi".to_string()),
                state: None,
                pincode: None,
                emergency_contact_name: None,
                emergency_contact_phone: None,
            },
            skills: SkillsDto {
                selected_skills: vec!["Medical".to_string(), "First Aid".to_string()],
                license_number: None,
            },
            verification: None,
            availability: AvailabilityDto {
                max_distance: None,
                selected_days: vec!["Monday".to_string()],
                selected_emergencies: vec![],
                notifications: None,
            },
        }
    }

    #[tokio::test]
    async fn test_register_normalizes_and_defaults() {
        let store = Arc::new(MemoryStore::new());
        let service = VolunteerService::new(store.clone() as Arc<dyn EntityStore>);

        let registered = service
            .register(registration("Amit@Example.COM"))
            .await
            .unwrap();

        assert_eq!(registered.full_name, "Amit Kumar");
        assert_eq!(registered.email, "amit@example.com");
        assert_eq!(registered.status, VolunteerStatus::Pending);

        let stored = store.get_volunteer(registered.id).await.unwrap().unwrap();
        assert_eq!(stored.max_distance_km, DEFAULT_MAX_DISTANCE_KM);
        assert!(stored.notifications.sms);
        assert!(stored.notifications.email);
        assert!(stored.notifications.push);
        assert!(!stored.notifications.whatsapp);
        assert_eq!(stored.rating, 0.0);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let store = Arc::new(MemoryStore::new());
        let service = VolunteerService::new(store);

        service.register(registration("amit@example.com")).await.unwrap();

        // same email with different casing is still a duplicate
        let err = service
            .register(registration("AMIT@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_stats_unknown_volunteer_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = VolunteerService::new(store);

        let err = service.stats(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_tasks_join_requests_newest_first() {
        let store = Arc::new(MemoryStore::new());
        let service = VolunteerService::new(store.clone() as Arc<dyn EntityStore>);

        let registered = service.register(registration("amit@example.com")).await.unwrap();

        let older = request_with_skills(&["Medical"]);
        let newer = request_with_skills(&["Setup"]);
        store.insert_request(older.clone()).await.unwrap();
        store.insert_request(newer.clone()).await.unwrap();

        let base = Utc::now();
        let first = Assignment::new(older.id, registered.id, base - chrono::Duration::hours(1));
        let second = Assignment::new(newer.id, registered.id, base);
        store.insert_assignment(first).await.unwrap();
        store.insert_assignment(second).await.unwrap();

        let tasks = service.tasks(registered.id).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].request.id, newer.id);
        assert_eq!(tasks[1].request.id, older.id);
    }
}
