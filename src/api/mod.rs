//! HTTP API adapter
//!
//! Thin axum layer mapping routes onto the services and recovering every
//! error into a structured `{"error": ...}` response at the boundary.

pub mod handlers;
pub mod routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::database::{DatabasePool, DatabaseService};
use crate::reports::ReportService;
use crate::services::{DirectoryService, RegistrationService};
use crate::utils::errors::CampusError;

pub use routes::build_router;

/// Shared application state injected into every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub directory: DirectoryService,
    pub registrations: RegistrationService,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(pool: DatabasePool) -> Self {
        let db = DatabaseService::new(pool.clone());
        Self {
            directory: DirectoryService::new(db.clone()),
            registrations: RegistrationService::new(pool.clone(), db.clone()),
            reports: ReportService::new(db),
            pool,
        }
    }
}

impl IntoResponse for CampusError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.is_client_error() {
            // Validation, conflicts and capacity all surface as 400,
            // matching the reference behavior of the API
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Internal error while handling request");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
