use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contact::services::ContactService;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a contact form message
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Submission stored", body = ApiResponse<ContactResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

/// List contact form submissions
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "List of submissions", body = ApiResponse<Vec<ContactResponseDto>>),
    ),
    tag = "contact"
)]
pub async fn list_contacts(
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<Vec<ContactResponseDto>>>> {
    let submissions = service.list().await?;
    let total = submissions.len();
    Ok(Json(ApiResponse::success(
        Some(submissions),
        None,
        Meta::total(total),
    )))
}
