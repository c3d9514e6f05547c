use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::tasks::dtos::AcceptedTaskDto;
use crate::features::tasks::services::TaskService;
use crate::shared::types::ApiResponse;

/// Accept an assigned task
///
/// Unconditionally sets the assignment to accepted and stamps acceptedAt,
/// even if it was already accepted.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}/accept",
    params(
        ("id" = Uuid, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Task accepted", body = ApiResponse<AcceptedTaskDto>),
        (status = 404, description = "Assignment not found")
    ),
    tag = "tasks"
)]
pub async fn accept_task(
    State(service): State<Arc<TaskService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AcceptedTaskDto>>> {
    let accepted = service.accept(id).await?;
    Ok(Json(ApiResponse::success(
        Some(accepted),
        Some("Task accepted successfully".to_string()),
        None,
    )))
}
