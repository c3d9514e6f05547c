use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contact::models::ContactMessage;
use crate::features::requests::models::{AidRequest, Assignment, AssignmentStatus};
use crate::features::volunteers::models::Volunteer;
use crate::store::{AssignmentFilter, EntityStore};

#[derive(Default)]
struct Inner {
    volunteers: Vec<Volunteer>,
    requests: Vec<AidRequest>,
    assignments: Vec<Assignment>,
    contact_messages: Vec<ContactMessage>,
}

/// In-process store. Entities live in insertion-ordered vectors behind one
/// `RwLock`, so every operation (including the check-then-insert on
/// assignments) is atomic with respect to concurrent callers.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert_volunteer(&self, volunteer: Volunteer) -> Result<Volunteer> {
        let mut inner = self.inner.write().await;
        if inner.volunteers.iter().any(|v| v.email == volunteer.email) {
            return Err(AppError::Conflict(
                "A volunteer with this email is already registered".to_string(),
            ));
        }
        inner.volunteers.push(volunteer.clone());
        Ok(volunteer)
    }

    async fn get_volunteer(&self, id: Uuid) -> Result<Option<Volunteer>> {
        let inner = self.inner.read().await;
        Ok(inner.volunteers.iter().find(|v| v.id == id).cloned())
    }

    async fn find_volunteer_by_email(&self, email: &str) -> Result<Option<Volunteer>> {
        let inner = self.inner.read().await;
        Ok(inner.volunteers.iter().find(|v| v.email == email).cloned())
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
        let inner = self.inner.read().await;
        let mut volunteers = inner.volunteers.clone();
        volunteers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(volunteers)
    }

    async fn list_verified_volunteers(&self) -> Result<Vec<Volunteer>> {
        let inner = self.inner.read().await;
        Ok(inner
            .volunteers
            .iter()
            .filter(|v| v.is_verified())
            .cloned()
            .collect())
    }

    async fn insert_request(&self, request: AidRequest) -> Result<AidRequest> {
        let mut inner = self.inner.write().await;
        inner.requests.push(request.clone());
        Ok(request)
    }

    async fn get_request(&self, id: Uuid) -> Result<Option<AidRequest>> {
        let inner = self.inner.read().await;
        Ok(inner.requests.iter().find(|r| r.id == id).cloned())
    }

    async fn list_requests(&self) -> Result<Vec<AidRequest>> {
        let inner = self.inner.read().await;
        let mut requests = inner.requests.clone();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn insert_assignment(&self, assignment: Assignment) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let exists = inner.assignments.iter().any(|a| {
            a.request_id == assignment.request_id && a.volunteer_id == assignment.volunteer_id
        });
        if exists {
            return Ok(false);
        }
        inner.assignments.push(assignment);
        Ok(true)
    }

    async fn get_assignment(&self, id: Uuid) -> Result<Option<Assignment>> {
        let inner = self.inner.read().await;
        Ok(inner.assignments.iter().find(|a| a.id == id).cloned())
    }

    async fn list_assignments(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .assignments
            .iter()
            .filter(|a| {
                filter.request_id.is_none_or(|id| a.request_id == id)
                    && filter.volunteer_id.is_none_or(|id| a.volunteer_id == id)
                    && filter.status.is_none_or(|s| a.status == s)
            })
            .cloned()
            .collect())
    }

    async fn update_assignment_status(
        &self,
        id: Uuid,
        status: AssignmentStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Assignment>> {
        let mut inner = self.inner.write().await;
        let Some(assignment) = inner.assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        assignment.status = status;
        match status {
            AssignmentStatus::Accepted => assignment.accepted_at = Some(at),
            AssignmentStatus::Completed => assignment.completed_at = Some(at),
            AssignmentStatus::Pending => {}
        }
        Ok(Some(assignment.clone()))
    }

    async fn insert_contact_message(&self, message: ContactMessage) -> Result<ContactMessage> {
        let mut inner = self.inner.write().await;
        inner.contact_messages.push(message.clone());
        Ok(message)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        let inner = self.inner.read().await;
        let mut messages = inner.contact_messages.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_assignments_filters_by_status() {
        let store = MemoryStore::new();
        let request_id = Uuid::now_v7();
        let now = Utc::now();

        let first = Assignment::new(request_id, Uuid::now_v7(), now);
        let second = Assignment::new(request_id, Uuid::now_v7(), now);
        store.insert_assignment(first.clone()).await.unwrap();
        store.insert_assignment(second.clone()).await.unwrap();

        // nothing accepted yet
        let accepted_filter = AssignmentFilter {
            request_id: Some(request_id),
            status: Some(AssignmentStatus::Accepted),
            ..AssignmentFilter::default()
        };
        let accepted = store.list_assignments(accepted_filter).await.unwrap();
        assert!(accepted.is_empty());

        store
            .update_assignment_status(first.id, AssignmentStatus::Accepted, now)
            .await
            .unwrap();

        // only the accepted assignment comes back; pending stays filtered out
        let accepted = store.list_assignments(accepted_filter).await.unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].id, first.id);

        let pending = store
            .list_assignments(AssignmentFilter {
                request_id: Some(request_id),
                status: Some(AssignmentStatus::Pending),
                ..AssignmentFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second.id);

        // the status filter narrows the unfiltered set for the same request
        let all = store
            .list_assignments(AssignmentFilter::for_request(request_id))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }
}
