use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::requests::models::{AidRequest, Assignment, AssignmentStatus, Urgency};
use crate::features::volunteers::models::{NotificationPrefs, Volunteer, VolunteerStatus};
use crate::shared::validation::{not_blank, EMAIL_REGEX};

/// Personal information block of a registration submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoDto {
    #[validate(custom(function = not_blank, message = "Full name is required"))]
    pub full_name: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = not_blank, message = "Phone number is required"))]
    pub phone: String,

    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Skills block of a registration submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDto {
    #[validate(length(min = 1, message = "At least one skill must be selected"))]
    pub selected_skills: Vec<String>,

    pub license_number: Option<String>,
}

/// Availability block of a registration submission.
/// Defaults are documented here rather than guessed downstream: max distance
/// falls back to 10 km and notifications to {sms, email, push} on, whatsapp off.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDto {
    pub max_distance: Option<i32>,

    #[validate(length(min = 1, message = "Availability days must be selected"))]
    pub selected_days: Vec<String>,

    #[serde(default)]
    pub selected_emergencies: Vec<String>,

    pub notifications: Option<NotificationPrefs>,
}

/// Request DTO for volunteer registration (onboarding submission)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVolunteerDto {
    #[validate(nested)]
    pub personal_info: PersonalInfoDto,

    #[validate(nested)]
    pub skills: SkillsDto,

    /// Free-form verification payload; accepted at the boundary, inspected
    /// only by the external verification process
    #[serde(default)]
    pub verification: Option<serde_json::Value>,

    #[validate(nested)]
    pub availability: AvailabilityDto,
}

/// Response DTO echoed after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredVolunteerDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub status: VolunteerStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Volunteer> for RegisteredVolunteerDto {
    fn from(v: Volunteer) -> Self {
        Self {
            id: v.id,
            full_name: v.full_name,
            email: v.email,
            status: v.status,
            created_at: v.created_at,
        }
    }
}

/// Response DTO for volunteer listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub skills: Vec<String>,
    pub verified: bool,
    pub status: VolunteerStatus,
    pub rating: f64,
    pub tasks_completed: i32,
    pub hours_served: i32,
}

impl From<Volunteer> for VolunteerResponseDto {
    fn from(v: Volunteer) -> Self {
        let verified = v.is_verified();
        Self {
            id: v.id,
            name: v.full_name,
            email: v.email,
            phone: v.phone,
            city: v.city,
            state: v.state,
            skills: v.skills,
            verified,
            status: v.status,
            rating: v.rating,
            tasks_completed: v.tasks_completed,
            hours_served: v.hours_served,
        }
    }
}

/// Read-only service statistics for a volunteer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerStatsDto {
    pub tasks_completed: i32,
    pub hours_served: i32,
    pub rating: f64,
}

impl From<&Volunteer> for VolunteerStatsDto {
    fn from(v: &Volunteer) -> Self {
        Self {
            tasks_completed: v.tasks_completed,
            hours_served: v.hours_served,
            rating: v.rating,
        }
    }
}

/// Summary of the request an assignment belongs to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequestDto {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub urgency: Urgency,
}

/// One entry of a volunteer's task list: their assignment joined with the
/// request it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerTaskDto {
    pub id: Uuid,
    pub status: AssignmentStatus,
    pub assigned_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub request: TaskRequestDto,
}

impl VolunteerTaskDto {
    pub fn from_parts(assignment: &Assignment, request: &AidRequest) -> Self {
        Self {
            id: assignment.id,
            status: assignment.status,
            assigned_at: assignment.assigned_at,
            accepted_at: assignment.accepted_at,
            completed_at: assignment.completed_at,
            request: TaskRequestDto {
                id: request.id,
                title: request.title.clone(),
                location: request.location.clone(),
                urgency: request.urgency,
            },
        }
    }
}
