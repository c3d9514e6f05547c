use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Verification lifecycle of a registered volunteer.
/// Only `Verified` volunteers are eligible for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "volunteer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Pending,
    Verified,
    Rejected,
}

/// Notification channel preferences captured at registration
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NotificationPrefs {
    #[sqlx(rename = "notify_sms")]
    #[serde(default = "default_true")]
    pub sms: bool,
    #[sqlx(rename = "notify_email")]
    #[serde(default = "default_true")]
    pub email: bool,
    #[sqlx(rename = "notify_push")]
    #[serde(default = "default_true")]
    pub push: bool,
    #[sqlx(rename = "notify_whatsapp")]
    #[serde(default)]
    pub whatsapp: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            sms: true,
            email: true,
            push: true,
            whatsapp: false,
        }
    }
}

/// Database model for a registered volunteer
#[derive(Debug, Clone, FromRow)]
pub struct Volunteer {
    pub id: Uuid,
    pub full_name: String,
    /// Stored lowercased; unique across volunteers
    pub email: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub skills: Vec<String>,
    pub license_number: Option<String>,
    pub status: VolunteerStatus,
    pub rating: f64,
    pub tasks_completed: i32,
    pub hours_served: i32,
    pub max_distance_km: i32,
    pub available_days: Vec<String>,
    pub emergency_types: Vec<String>,
    #[sqlx(flatten)]
    pub notifications: NotificationPrefs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Volunteer {
    pub fn is_verified(&self) -> bool {
        self.status == VolunteerStatus::Verified
    }

    /// First listed skill, or the generic placeholder when none are listed
    pub fn primary_specialty(&self) -> String {
        self.skills
            .first()
            .cloned()
            .unwrap_or_else(|| crate::shared::constants::DEFAULT_SPECIALTY.to_string())
    }
}
