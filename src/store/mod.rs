//! Entity storage layer.
//!
//! All entity access goes through the [`EntityStore`] trait so the business
//! services never depend on which backing holds the data:
//!
//! - [`PgStore`]: Postgres via sqlx, used in production.
//! - [`MemoryStore`]: in-process storage behind a single `RwLock`, used for
//!   tests and for running the server without a database (demo mode).
//!
//! Both backings uphold the same invariants: volunteer emails are unique and
//! at most one assignment exists per (request, volunteer) pair, with
//! assignment inserts behaving as atomic insert-or-ignore.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::contact::models::ContactMessage;
use crate::features::requests::models::{AidRequest, Assignment, AssignmentStatus};
use crate::features::volunteers::models::Volunteer;

/// Filter for assignment queries; unset fields match everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter {
    pub request_id: Option<Uuid>,
    pub volunteer_id: Option<Uuid>,
    pub status: Option<AssignmentStatus>,
}

impl AssignmentFilter {
    pub fn for_request(request_id: Uuid) -> Self {
        Self {
            request_id: Some(request_id),
            ..Self::default()
        }
    }

    pub fn for_volunteer(volunteer_id: Uuid) -> Self {
        Self {
            volunteer_id: Some(volunteer_id),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Persists a new volunteer. Fails with `Conflict` when another volunteer
    /// already registered the same (lowercased) email.
    async fn insert_volunteer(&self, volunteer: Volunteer) -> Result<Volunteer>;

    async fn get_volunteer(&self, id: Uuid) -> Result<Option<Volunteer>>;

    async fn find_volunteer_by_email(&self, email: &str) -> Result<Option<Volunteer>>;

    /// All volunteers, newest registration first
    async fn list_volunteers(&self) -> Result<Vec<Volunteer>>;

    /// Volunteers with `Verified` status, in natural store order (not re-sorted)
    async fn list_verified_volunteers(&self) -> Result<Vec<Volunteer>>;

    async fn insert_request(&self, request: AidRequest) -> Result<AidRequest>;

    async fn get_request(&self, id: Uuid) -> Result<Option<AidRequest>>;

    /// All requests, newest first
    async fn list_requests(&self) -> Result<Vec<AidRequest>>;

    /// Insert-or-ignore on the (request_id, volunteer_id) pair.
    /// Returns `true` when a row was created, `false` when the pair already
    /// existed. The check and insert are a single atomic step.
    async fn insert_assignment(&self, assignment: Assignment) -> Result<bool>;

    async fn get_assignment(&self, id: Uuid) -> Result<Option<Assignment>>;

    async fn list_assignments(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>>;

    /// Sets the status and stamps the matching timestamp column
    /// (accepted_at / completed_at). Returns the updated row, or `None` when
    /// no assignment has that id.
    async fn update_assignment_status(
        &self,
        id: Uuid,
        status: AssignmentStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Assignment>>;

    async fn insert_contact_message(&self, message: ContactMessage) -> Result<ContactMessage>;

    /// All contact submissions, newest first
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>>;
}
