//! Student handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::AppState;
use crate::models::student::CreateStudentRequest;
use crate::utils::errors::CampusError;

/// GET /colleges/{id}/students
pub async fn list(
    State(state): State<AppState>,
    Path(college_id): Path<i64>,
) -> Result<impl IntoResponse, CampusError> {
    let students = state.directory.list_students(college_id).await?;
    Ok(Json(students))
}

/// POST /colleges/{id}/students
pub async fn create(
    State(state): State<AppState>,
    Path(college_id): Path<i64>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, CampusError> {
    let student = state.directory.create_student(college_id, request).await?;
    Ok((StatusCode::CREATED, Json(student)))
}
