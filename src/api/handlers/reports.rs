//! Report handlers

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::api::AppState;
use crate::reports::AnalyticsFilter;
use crate::utils::errors::CampusError;

#[derive(Debug, Deserialize)]
pub struct TopActiveQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub event_type: Option<String>,
    pub college_id: Option<i64>,
}

/// GET /reports/events/popularity
pub async fn event_popularity(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CampusError> {
    let report = state.reports.event_popularity().await?;
    Ok(Json(report))
}

/// GET /reports/students/participation
pub async fn student_participation(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CampusError> {
    let report = state.reports.student_participation().await?;
    Ok(Json(report))
}

/// GET /reports/students/top-active
pub async fn top_active_students(
    State(state): State<AppState>,
    Query(query): Query<TopActiveQuery>,
) -> Result<impl IntoResponse, CampusError> {
    let report = state.reports.top_active_students(query.limit).await?;
    Ok(Json(report))
}

/// GET /reports/events/analytics
pub async fn event_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, CampusError> {
    let filter = AnalyticsFilter {
        event_type: query.event_type,
        college_id: query.college_id,
    };
    let report = state.reports.event_analytics(filter).await?;
    Ok(Json(report))
}
