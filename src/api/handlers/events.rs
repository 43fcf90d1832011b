//! Event handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::AppState;
use crate::models::event::CreateEventRequest;
use crate::utils::errors::CampusError;

/// GET /colleges/{id}/events
pub async fn list(
    State(state): State<AppState>,
    Path(college_id): Path<i64>,
) -> Result<impl IntoResponse, CampusError> {
    let events = state.directory.list_events(college_id).await?;
    Ok(Json(events))
}

/// POST /colleges/{id}/events
pub async fn create(
    State(state): State<AppState>,
    Path(college_id): Path<i64>,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, CampusError> {
    let event = state.directory.create_event(college_id, request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, CampusError> {
    let event = state.directory.get_event(event_id).await?;
    Ok(Json(event))
}
