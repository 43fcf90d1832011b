//! College handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::AppState;
use crate::models::college::CreateCollegeRequest;
use crate::utils::errors::CampusError;

/// GET /colleges
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, CampusError> {
    let colleges = state.directory.list_colleges().await?;
    Ok(Json(colleges))
}

/// POST /colleges
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateCollegeRequest>,
) -> Result<impl IntoResponse, CampusError> {
    let college = state.directory.create_college(request).await?;
    Ok((StatusCode::CREATED, Json(college)))
}
