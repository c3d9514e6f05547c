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
use crate::features::requests::dtos::{
    AssignVolunteersDto, AssignmentResultDto, CandidateVolunteerDto, CreateRequestDto,
    RequestViewDto,
};
use crate::features::requests::services::{AssignmentService, MatchingService, RequestService};
use crate::shared::types::{ApiResponse, Meta};

/// State for request handlers
#[derive(Clone)]
pub struct RequestState {
    pub request_service: Arc<RequestService>,
    pub matching_service: Arc<MatchingService>,
    pub assignment_service: Arc<AssignmentService>,
}

/// List all requests with live volunteer counts and matches
#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "List of requests", body = ApiResponse<Vec<RequestViewDto>>),
    ),
    tag = "requests"
)]
pub async fn list_requests(
    State(state): State<RequestState>,
) -> Result<Json<ApiResponse<Vec<RequestViewDto>>>> {
    let views = state.request_service.list().await?;
    let total = views.len();
    Ok(Json(ApiResponse::success(Some(views), None, Meta::total(total))))
}

/// Create a new aid request
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateRequestDto,
    responses(
        (status = 201, description = "Request created successfully", body = ApiResponse<RequestViewDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "requests"
)]
pub async fn create_request(
    State(state): State<RequestState>,
    AppJson(dto): AppJson<CreateRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<RequestViewDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let view = state.request_service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(view),
            Some("Request created successfully".to_string()),
            None,
        )),
    ))
}

/// List volunteers whose skills match the request's required skills
#[utoipa::path(
    get,
    path = "/api/requests/{id}/matches",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Matching volunteers", body = ApiResponse<Vec<CandidateVolunteerDto>>),
        (status = 404, description = "Request not found")
    ),
    tag = "requests"
)]
pub async fn get_matches(
    State(state): State<RequestState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CandidateVolunteerDto>>>> {
    let matches = state.matching_service.matches_for(id).await?;
    let total = matches.len();
    Ok(Json(ApiResponse::success(
        Some(matches),
        None,
        Meta::total(total),
    )))
}

/// Assign chosen volunteers to a request
///
/// Unknown volunteer ids are skipped and already-assigned pairs are no-ops;
/// the response reports how many assignments were actually created.
#[utoipa::path(
    post,
    path = "/api/requests/{id}/assign",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = AssignVolunteersDto,
    responses(
        (status = 201, description = "Volunteers assigned", body = ApiResponse<AssignmentResultDto>),
        (status = 400, description = "volunteerIds missing or empty"),
        (status = 404, description = "Request not found")
    ),
    tag = "requests"
)]
pub async fn assign_volunteers(
    State(state): State<RequestState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AssignVolunteersDto>,
) -> Result<(StatusCode, Json<ApiResponse<AssignmentResultDto>>)> {
    let result = state
        .assignment_service
        .assign(id, &dto.volunteer_ids)
        .await?;

    let message = format!(
        "{} volunteers assigned successfully",
        result.assignments_created
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(result), Some(message), None)),
    ))
}
