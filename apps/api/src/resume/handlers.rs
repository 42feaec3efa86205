//! HTTP handlers for the resume document API — a thin transport layer over
//! `ResumeService`. The requester identity arrives as a trusted `user_id`
//! query parameter supplied by the upstream auth layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resume::service::ResumeDraft;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub count: usize,
    pub resumes: Vec<Resume>,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(draft): Json<ResumeDraft>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let resume = state.service.create(params.user_id, draft).await?;
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Resume>, AppError> {
    let resume = state.service.fetch(params.user_id, id).await?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(draft): Json<ResumeDraft>,
) -> Result<Json<Resume>, AppError> {
    let resume = state.service.replace(params.user_id, id, draft).await?;
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.service.delete(params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/:user_id/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.service.list_owned(params.user_id, owner_id).await?;
    Ok(Json(ResumeListResponse {
        count: resumes.len(),
        resumes,
    }))
}
