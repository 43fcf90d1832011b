//! Campus Events Backend
//!
//! A campus event-management backend: colleges, students, events,
//! registrations, attendance check-ins and feedback, with aggregate reports
//! (event popularity, student participation, top active students, filtered
//! analytics) computed by a storage-independent report engine.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod reports;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusError, Result};

// Re-export main components for easy access
pub use api::{build_router, AppState};
pub use database::DatabaseService;
pub use reports::ReportService;
pub use services::{DirectoryService, RegistrationService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
