//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::models::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    if request.file_name.trim().is_empty() {
        return Err(AppError::Validation("file_name cannot be empty".to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let resume = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, file_name, content)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(request.file_name.trim())
    .bind(&request.content)
    .fetch_one(&state.db)
    .await?;

    info!("Stored resume {} for user {}", resume.id, resume.user_id);
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let resumes = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(resumes))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(params.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
///
/// Interviews built on the resume are removed with it.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(Json(DeletedResponse {
        message: "Resume removed".to_string(),
    }))
}
