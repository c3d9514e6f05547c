use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::contact::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contact::models::ContactMessage;
use crate::store::EntityStore;

/// Service for contact form submissions
pub struct ContactService {
    store: Arc<dyn EntityStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, dto: CreateContactDto) -> Result<ContactResponseDto> {
        let message = ContactMessage {
            id: Uuid::now_v7(),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            message: dto.message.trim().to_string(),
            created_at: Utc::now(),
        };

        let message = self.store.insert_contact_message(message).await?;
        tracing::info!("New contact submission from: {}", message.email);

        Ok(message.into())
    }

    /// All submissions, newest first
    pub async fn list(&self) -> Result<Vec<ContactResponseDto>> {
        let messages = self.store.list_contact_messages().await?;
        Ok(messages.into_iter().map(|m| m.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_create_normalizes_email() {
        let store = Arc::new(MemoryStore::new());
        let service = ContactService::new(store);

        let created = service
            .create(CreateContactDto {
                name: " Jane ".to_string(),
                email: "Jane@Example.COM".to_string(),
                message: "Need help coordinating".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Jane");
        assert_eq!(created.email, "jane@example.com");

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
    }
}
