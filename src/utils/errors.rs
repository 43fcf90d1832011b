//! Error handling for the campus events backend
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy. Every operation failure
//! maps to one of four logical categories (validation, not-found, conflict,
//! capacity) plus infrastructure errors; the HTTP adapter turns these into
//! status codes at the boundary.

use thiserror::Error;

/// Main error type for the campus events backend
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("College not found: {college_id}")]
    CollegeNotFound { college_id: i64 },

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Registration not found: {registration_id}")]
    RegistrationNotFound { registration_id: i64 },

    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("Student already registered for this event")]
    DuplicateRegistration { event_id: i64, student_id: i64 },

    #[error("Student already checked in")]
    DuplicateAttendance { registration_id: i64 },

    #[error("Feedback already submitted")]
    DuplicateFeedback { registration_id: i64 },

    #[error("Event is at full capacity")]
    CapacityExceeded { event_id: i64 },
}

/// Result type alias for campus events operations
pub type Result<T> = std::result::Result<T, CampusError>;

impl CampusError {
    /// Whether the error is a client-side fault rather than an
    /// infrastructure failure
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            CampusError::Database(_)
                | CampusError::Migration(_)
                | CampusError::Config(_)
                | CampusError::Serialization(_)
                | CampusError::Io(_)
        )
    }

    /// Whether the error is one of the logical conflict cases
    /// (duplicate registration, attendance, feedback or email)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CampusError::DuplicateEmail { .. }
                | CampusError::DuplicateRegistration { .. }
                | CampusError::DuplicateAttendance { .. }
                | CampusError::DuplicateFeedback { .. }
        )
    }

    /// Whether the error indicates a referenced entity is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CampusError::CollegeNotFound { .. }
                | CampusError::StudentNotFound { .. }
                | CampusError::EventNotFound { .. }
                | CampusError::RegistrationNotFound { .. }
        )
    }

    /// True when the underlying sqlx error is a unique-constraint violation
    /// (Postgres SQLSTATE 23505). Used to map constraint backstops onto the
    /// same conflict errors the pre-checks produce.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            CampusError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some("23505")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = CampusError::DuplicateRegistration { event_id: 1, student_id: 2 };
        assert!(err.is_conflict());
        assert!(err.is_client_error());
        assert!(!err.is_not_found());

        let err = CampusError::EventNotFound { event_id: 7 };
        assert!(err.is_not_found());
        assert!(err.is_client_error());

        let err = CampusError::Config("missing url".to_string());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_messages() {
        let err = CampusError::CapacityExceeded { event_id: 3 };
        assert_eq!(err.to_string(), "Event is at full capacity");

        let err = CampusError::Validation("Rating must be between 1 and 5".to_string());
        assert_eq!(err.to_string(), "Invalid input: Rating must be between 1 and 5");
    }
}
