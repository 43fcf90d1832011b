//! Route table
//!
//! Maps the HTTP surface onto the handler functions.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{colleges, events, health, registrations, reports, students};
use crate::api::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/colleges", get(colleges::list).post(colleges::create))
        .route(
            "/colleges/{id}/students",
            get(students::list).post(students::create),
        )
        .route("/colleges/{id}/events", get(events::list).post(events::create))
        .route("/events/{id}", get(events::get_by_id))
        .route("/events/{id}/register", post(registrations::register))
        .route("/registrations/{id}/checkin", post(registrations::check_in))
        .route("/registrations/{id}/feedback", post(registrations::submit_feedback))
        .route("/reports/events/popularity", get(reports::event_popularity))
        .route("/reports/students/participation", get(reports::student_participation))
        .route("/reports/students/top-active", get(reports::top_active_students))
        .route("/reports/events/analytics", get(reports::event_analytics))
        .route("/health", get(health::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
