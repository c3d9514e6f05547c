use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_urgency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Active,
    Scheduled,
    Completed,
}

/// Database model for an emergency-aid request posted by an organization
#[derive(Debug, Clone, FromRow)]
pub struct AidRequest {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    /// Required skills, in the order the requester listed them
    pub skills: Vec<String>,
    pub urgency: Urgency,
    pub status: RequestStatus,
    pub volunteers_needed: i32,
    pub organization_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
