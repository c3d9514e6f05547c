use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contact::models::ContactMessage;
use crate::shared::validation::{not_blank, EMAIL_REGEX};

/// Request DTO for a contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = not_blank, message = "Message is required"))]
    pub message: String,
}

/// Response DTO for a stored contact submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactResponseDto {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            message: m.message,
            created_at: m.created_at,
        }
    }
}
