//! Registration, check-in and feedback handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::api::AppState;
use crate::models::registration::SubmitFeedbackRequest;
use crate::utils::errors::CampusError;

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub student_id: i64,
}

/// POST /events/{id}/register
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, CampusError> {
    let registration = state
        .registrations
        .register_student(event_id, body.student_id)
        .await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

/// POST /registrations/{id}/checkin
pub async fn check_in(
    State(state): State<AppState>,
    Path(registration_id): Path<i64>,
) -> Result<impl IntoResponse, CampusError> {
    let attendance = state.registrations.check_in(registration_id).await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// POST /registrations/{id}/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(registration_id): Path<i64>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<impl IntoResponse, CampusError> {
    let feedback = state
        .registrations
        .submit_feedback(registration_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}
