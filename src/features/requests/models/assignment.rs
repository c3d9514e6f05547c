use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Assignment status machine: `Pending -> Accepted -> Completed`.
/// `Completed` is terminal and only set by external task-completion flows;
/// this service drives the Pending -> Accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "assignment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Accepted,
    Completed,
}

impl AssignmentStatus {
    /// An assignment counts as confirmed once it has been accepted or later
    pub fn is_confirmed(self) -> bool {
        matches!(self, AssignmentStatus::Accepted | AssignmentStatus::Completed)
    }
}

/// Database model linking one volunteer to one request.
/// At most one assignment exists per (request_id, volunteer_id) pair.
#[derive(Debug, Clone, FromRow)]
pub struct Assignment {
    pub id: Uuid,
    pub request_id: Uuid,
    pub volunteer_id: Uuid,
    pub status: AssignmentStatus,
    pub assigned_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn new(request_id: Uuid, volunteer_id: Uuid, assigned_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            request_id,
            volunteer_id,
            status: AssignmentStatus::Pending,
            assigned_at,
            accepted_at: None,
            completed_at: None,
        }
    }
}
