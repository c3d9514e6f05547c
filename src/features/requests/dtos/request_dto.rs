use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::requests::models::{AidRequest, RequestStatus, Urgency};
use crate::features::volunteers::models::Volunteer;
use crate::shared::validation::not_blank;

/// Request DTO for posting a new aid request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    #[validate(custom(function = not_blank, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(custom(function = not_blank, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Vec<String>,

    pub urgency: Option<Urgency>,

    #[validate(range(min = 1, message = "volunteersNeeded must be at least 1"))]
    pub volunteers_needed: Option<i32>,

    pub organization_name: Option<String>,
}

/// Headcount summary of a request: posted need vs. live assignment counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerCountsDto {
    pub needed: i32,
    /// Assignments for this request, any status
    pub matched: i64,
    /// Assignments that reached accepted or completed status
    pub confirmed: i64,
}

/// Summary of a volunteer that holds an assignment to a request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchedVolunteerDto {
    pub name: String,
    pub verified: bool,
    pub rating: f64,
    pub specialty: String,
}

impl From<&Volunteer> for MatchedVolunteerDto {
    fn from(v: &Volunteer) -> Self {
        Self {
            name: v.full_name.clone(),
            verified: v.is_verified(),
            rating: v.rating,
            specialty: v.primary_specialty(),
        }
    }
}

/// Read view of a request enriched with live assignment and volunteer data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestViewDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub skills: Vec<String>,
    pub urgency: Urgency,
    pub status: RequestStatus,
    pub volunteers: VolunteerCountsDto,
    pub organization_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub matches: Vec<MatchedVolunteerDto>,
}

impl RequestViewDto {
    pub fn from_parts(
        request: &AidRequest,
        matched: i64,
        confirmed: i64,
        matches: Vec<MatchedVolunteerDto>,
    ) -> Self {
        Self {
            id: request.id,
            title: request.title.clone(),
            description: request.description.clone(),
            location: request.location.clone(),
            skills: request.skills.clone(),
            urgency: request.urgency,
            status: request.status,
            volunteers: VolunteerCountsDto {
                needed: request.volunteers_needed,
                matched,
                confirmed,
            },
            organization_name: request.organization_name.clone(),
            created_at: request.created_at,
            matches,
        }
    }
}

/// Candidate volunteer produced by the skill matcher, prior to any assignment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateVolunteerDto {
    pub id: Uuid,
    pub name: String,
    pub verified: bool,
    pub rating: f64,
    pub specialty: String,
    pub skills: Vec<String>,
    pub tasks_completed: i32,
}

impl From<&Volunteer> for CandidateVolunteerDto {
    fn from(v: &Volunteer) -> Self {
        Self {
            id: v.id,
            name: v.full_name.clone(),
            verified: v.is_verified(),
            rating: v.rating,
            specialty: v.primary_specialty(),
            skills: v.skills.clone(),
            tasks_completed: v.tasks_completed,
        }
    }
}

/// Request DTO for assigning chosen volunteers to a request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignVolunteersDto {
    pub volunteer_ids: Vec<Uuid>,
}

/// Result of a batch assignment: only the created count is reported, so the
/// caller must inspect it to detect ids that were skipped
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResultDto {
    pub request_id: Uuid,
    pub assignments_created: usize,
}
