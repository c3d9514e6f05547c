use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::requests::models::AssignmentStatus;

/// Response DTO after a task acceptance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedTaskDto {
    pub id: Uuid,
    pub status: AssignmentStatus,
    pub accepted_at: Option<DateTime<Utc>>,
}
