use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contact::models::ContactMessage;
use crate::features::requests::models::{AidRequest, Assignment, AssignmentStatus};
use crate::features::volunteers::models::Volunteer;
use crate::store::{AssignmentFilter, EntityStore};

/// Postgres-backed store. Uniqueness invariants are enforced by the schema:
/// a unique index on volunteers.email and a unique constraint on
/// assignments (request_id, volunteer_id).
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl EntityStore for PgStore {
    async fn insert_volunteer(&self, volunteer: Volunteer) -> Result<Volunteer> {
        let inserted = sqlx::query_as::<_, Volunteer>(
            r#"
            INSERT INTO volunteers (
                id, full_name, email, phone, city, state, pincode,
                emergency_contact_name, emergency_contact_phone,
                skills, license_number, status, rating, tasks_completed, hours_served,
                max_distance_km, available_days, emergency_types,
                notify_sms, notify_email, notify_push, notify_whatsapp,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24
            )
            RETURNING *
            "#,
        )
        .bind(volunteer.id)
        .bind(&volunteer.full_name)
        .bind(&volunteer.email)
        .bind(&volunteer.phone)
        .bind(&volunteer.city)
        .bind(&volunteer.state)
        .bind(&volunteer.pincode)
        .bind(&volunteer.emergency_contact_name)
        .bind(&volunteer.emergency_contact_phone)
        .bind(&volunteer.skills)
        .bind(&volunteer.license_number)
        .bind(volunteer.status)
        .bind(volunteer.rating)
        .bind(volunteer.tasks_completed)
        .bind(volunteer.hours_served)
        .bind(volunteer.max_distance_km)
        .bind(&volunteer.available_days)
        .bind(&volunteer.emergency_types)
        .bind(volunteer.notifications.sms)
        .bind(volunteer.notifications.email)
        .bind(volunteer.notifications.push)
        .bind(volunteer.notifications.whatsapp)
        .bind(volunteer.created_at)
        .bind(volunteer.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(
                    "A volunteer with this email is already registered".to_string(),
                )
            } else {
                tracing::error!("Failed to insert volunteer: {:?}", e);
                AppError::Database(e)
            }
        })?;

        Ok(inserted)
    }

    async fn get_volunteer(&self, id: Uuid) -> Result<Option<Volunteer>> {
        let volunteer = sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(volunteer)
    }

    async fn find_volunteer_by_email(&self, email: &str) -> Result<Option<Volunteer>> {
        let volunteer =
            sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(volunteer)
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
        let volunteers =
            sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(volunteers)
    }

    async fn list_verified_volunteers(&self) -> Result<Vec<Volunteer>> {
        let volunteers = sqlx::query_as::<_, Volunteer>(
            "SELECT * FROM volunteers WHERE status = 'verified' ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(volunteers)
    }

    async fn insert_request(&self, request: AidRequest) -> Result<AidRequest> {
        let inserted = sqlx::query_as::<_, AidRequest>(
            r#"
            INSERT INTO requests (
                id, title, description, location, skills, urgency, status,
                volunteers_needed, organization_name, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(request.id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.location)
        .bind(&request.skills)
        .bind(request.urgency)
        .bind(request.status)
        .bind(request.volunteers_needed)
        .bind(&request.organization_name)
        .bind(request.created_at)
        .bind(request.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert request: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(inserted)
    }

    async fn get_request(&self, id: Uuid) -> Result<Option<AidRequest>> {
        let request = sqlx::query_as::<_, AidRequest>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(request)
    }

    async fn list_requests(&self) -> Result<Vec<AidRequest>> {
        let requests =
            sqlx::query_as::<_, AidRequest>("SELECT * FROM requests ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(requests)
    }

    async fn insert_assignment(&self, assignment: Assignment) -> Result<bool> {
        // ON CONFLICT DO NOTHING makes the duplicate check and the insert a
        // single atomic statement; rows_affected tells us which case hit
        let result = sqlx::query(
            r#"
            INSERT INTO assignments (
                id, request_id, volunteer_id, status, assigned_at, accepted_at, completed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (request_id, volunteer_id) DO NOTHING
            "#,
        )
        .bind(assignment.id)
        .bind(assignment.request_id)
        .bind(assignment.volunteer_id)
        .bind(assignment.status)
        .bind(assignment.assigned_at)
        .bind(assignment.accepted_at)
        .bind(assignment.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert assignment: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn get_assignment(&self, id: Uuid) -> Result<Option<Assignment>> {
        let assignment =
            sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(assignment)
    }

    async fn list_assignments(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT * FROM assignments
            WHERE ($1::uuid IS NULL OR request_id = $1)
              AND ($2::uuid IS NULL OR volunteer_id = $2)
              AND ($3::assignment_status IS NULL OR status = $3)
            ORDER BY assigned_at
            "#,
        )
        .bind(filter.request_id)
        .bind(filter.volunteer_id)
        .bind(filter.status)
        .fetch_all(&self.pool)
        .await?;
        Ok(assignments)
    }

    async fn update_assignment_status(
        &self,
        id: Uuid,
        status: AssignmentStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Assignment>> {
        let updated = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET status = $2,
                accepted_at = CASE WHEN $2 = 'accepted'::assignment_status THEN $3 ELSE accepted_at END,
                completed_at = CASE WHEN $2 = 'completed'::assignment_status THEN $3 ELSE completed_at END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update assignment status: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(updated)
    }

    async fn insert_contact_message(&self, message: ContactMessage) -> Result<ContactMessage> {
        let inserted = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (id, name, email, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contact message: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(inserted)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }
}
