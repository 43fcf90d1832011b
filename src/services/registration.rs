//! Registration service implementation
//!
//! Handles the registration lifecycle: registering a student for an event,
//! checking in, and submitting feedback. Each operation runs as a single
//! transaction so no partial effect (a registration row without the counter
//! increment, an attendance row without the status change) is ever visible.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::database::DatabaseService;
use crate::models::registration::{
    Attendance, Feedback, Registration, RegistrationStatus, SubmitFeedbackRequest,
};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::log_registration_action;

/// Registration service for event sign-up, check-in and feedback
#[derive(Debug, Clone)]
pub struct RegistrationService {
    pool: PgPool,
    db: DatabaseService,
}

impl RegistrationService {
    pub fn new(pool: PgPool, db: DatabaseService) -> Self {
        Self { pool, db }
    }

    /// Register a student for an event.
    ///
    /// The event row is locked for the duration of the transaction, so the
    /// duplicate check, the capacity check, the registration insert and the
    /// counter increment are serialized against concurrent registrations
    /// for the same event.
    pub async fn register_student(&self, event_id: i64, student_id: i64) -> Result<Registration> {
        debug!(event_id = event_id, student_id = student_id, "Registering student for event");

        if self.db.students.find_by_id(student_id).await?.is_none() {
            return Err(CampusError::StudentNotFound { student_id });
        }

        let mut tx = self.pool.begin().await?;

        let event = self
            .db
            .events
            .find_by_id_for_update(&mut tx, event_id)
            .await?
            .ok_or(CampusError::EventNotFound { event_id })?;

        if self
            .db
            .registrations
            .is_registered_in_tx(&mut tx, event_id, student_id)
            .await?
        {
            return Err(CampusError::DuplicateRegistration { event_id, student_id });
        }

        if event.current_registrations >= event.max_capacity {
            return Err(CampusError::CapacityExceeded { event_id });
        }

        let registration = self
            .db
            .registrations
            .create_in_tx(&mut tx, event_id, student_id)
            .await?;
        self.db.events.increment_registrations(&mut tx, event_id).await?;

        tx.commit().await?;

        log_registration_action(event_id, student_id, "registered");
        Ok(registration)
    }

    /// Check a registered student in, creating the attendance record and
    /// marking the registration as attended in one transaction
    pub async fn check_in(&self, registration_id: i64) -> Result<Attendance> {
        debug!(registration_id = registration_id, "Checking in registration");

        let registration = self
            .db
            .registrations
            .find_by_id(registration_id)
            .await?
            .ok_or(CampusError::RegistrationNotFound { registration_id })?;

        if self.db.registrations.find_attendance(registration_id).await?.is_some() {
            return Err(CampusError::DuplicateAttendance { registration_id });
        }

        let mut tx = self.pool.begin().await?;

        let attendance = match self
            .db
            .registrations
            .create_attendance_in_tx(&mut tx, registration_id, Utc::now())
            .await
        {
            Ok(attendance) => attendance,
            Err(err) if err.is_unique_violation() => {
                return Err(CampusError::DuplicateAttendance { registration_id });
            }
            Err(err) => return Err(err),
        };

        self.db
            .registrations
            .set_status_in_tx(&mut tx, registration_id, RegistrationStatus::Attended)
            .await?;

        tx.commit().await?;

        log_registration_action(registration.event_id, registration.student_id, "checked_in");
        Ok(attendance)
    }

    /// Submit feedback for a registration
    pub async fn submit_feedback(
        &self,
        registration_id: i64,
        request: SubmitFeedbackRequest,
    ) -> Result<Feedback> {
        validate_rating(request.rating)?;

        let registration = self
            .db
            .registrations
            .find_by_id(registration_id)
            .await?
            .ok_or(CampusError::RegistrationNotFound { registration_id })?;

        if self.db.registrations.find_feedback(registration_id).await?.is_some() {
            return Err(CampusError::DuplicateFeedback { registration_id });
        }

        let mut tx = self.pool.begin().await?;

        let feedback = match self
            .db
            .registrations
            .create_feedback_in_tx(&mut tx, registration_id, request.rating, request.comments)
            .await
        {
            Ok(feedback) => feedback,
            Err(err) if err.is_unique_violation() => {
                return Err(CampusError::DuplicateFeedback { registration_id });
            }
            Err(err) => return Err(err),
        };

        tx.commit().await?;

        info!(
            registration_id = registration_id,
            event_id = registration.event_id,
            rating = feedback.rating,
            "Feedback submitted"
        );
        Ok(feedback)
    }
}

/// Reject ratings outside the inclusive 1..=5 range
pub fn validate_rating(rating: i32) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(CampusError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}
