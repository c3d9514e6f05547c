use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::volunteers::dtos::{
    RegisterVolunteerDto, RegisteredVolunteerDto, VolunteerResponseDto, VolunteerStatsDto,
    VolunteerTaskDto,
};
use crate::features::volunteers::services::VolunteerService;
use crate::shared::types::{ApiResponse, Meta};

/// Register a new volunteer (onboarding submission)
#[utoipa::path(
    post,
    path = "/api/volunteers/register",
    request_body = RegisterVolunteerDto,
    responses(
        (status = 201, description = "Registration submitted", body = ApiResponse<RegisteredVolunteerDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "volunteers"
)]
pub async fn register_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppJson(dto): AppJson<RegisterVolunteerDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegisteredVolunteerDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let registered = service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(registered),
            Some(
                "Volunteer registration submitted successfully. Your application is pending verification."
                    .to_string(),
            ),
            None,
        )),
    ))
}

/// List all volunteers
#[utoipa::path(
    get,
    path = "/api/volunteers",
    responses(
        (status = 200, description = "List of volunteers", body = ApiResponse<Vec<VolunteerResponseDto>>),
    ),
    tag = "volunteers"
)]
pub async fn list_volunteers(
    State(service): State<Arc<VolunteerService>>,
) -> Result<Json<ApiResponse<Vec<VolunteerResponseDto>>>> {
    let volunteers = service.list().await?;
    let total = volunteers.len();
    Ok(Json(ApiResponse::success(
        Some(volunteers),
        None,
        Meta::total(total),
    )))
}

/// Get a volunteer by ID
#[utoipa::path(
    get,
    path = "/api/volunteers/{id}",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    responses(
        (status = 200, description = "Volunteer found", body = ApiResponse<VolunteerResponseDto>),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn get_volunteer(
    State(service): State<Arc<VolunteerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VolunteerResponseDto>>> {
    let volunteer = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(volunteer), None, None)))
}

/// Get a volunteer's service statistics
#[utoipa::path(
    get,
    path = "/api/volunteers/{id}/stats",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    responses(
        (status = 200, description = "Volunteer statistics", body = ApiResponse<VolunteerStatsDto>),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn get_volunteer_stats(
    State(service): State<Arc<VolunteerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VolunteerStatsDto>>> {
    let stats = service.stats(id).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get a volunteer's assigned tasks with request details
#[utoipa::path(
    get,
    path = "/api/volunteers/{id}/tasks",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    responses(
        (status = 200, description = "Volunteer's tasks", body = ApiResponse<Vec<VolunteerTaskDto>>),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn get_volunteer_tasks(
    State(service): State<Arc<VolunteerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<VolunteerTaskDto>>>> {
    let tasks = service.tasks(id).await?;
    let total = tasks.len();
    Ok(Json(ApiResponse::success(
        Some(tasks),
        None,
        Meta::total(total),
    )))
}
