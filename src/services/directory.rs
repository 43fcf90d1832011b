//! Directory service implementation
//!
//! Handles creation and lookup of colleges, students and events, enforcing
//! the validation and uniqueness invariants before anything is written.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::database::DatabaseService;
use crate::models::college::{College, CreateCollegeRequest};
use crate::models::event::{CreateEventRequest, Event};
use crate::models::student::{CreateStudentRequest, Student};
use crate::utils::errors::{CampusError, Result};

/// Directory service for college, student and event management
#[derive(Debug, Clone)]
pub struct DirectoryService {
    db: DatabaseService,
}

impl DirectoryService {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a new college
    pub async fn create_college(&self, request: CreateCollegeRequest) -> Result<College> {
        if request.name.trim().is_empty() {
            return Err(CampusError::Validation("College name is required".to_string()));
        }

        let college = self.db.colleges.create(request).await?;
        info!(college_id = college.id, "College created");

        Ok(college)
    }

    /// List all colleges
    pub async fn list_colleges(&self) -> Result<Vec<College>> {
        self.db.colleges.list().await
    }

    /// Create a new student under a college
    pub async fn create_student(
        &self,
        college_id: i64,
        request: CreateStudentRequest,
    ) -> Result<Student> {
        if !self.db.colleges.exists(college_id).await? {
            return Err(CampusError::CollegeNotFound { college_id });
        }

        // Pre-check the email; the unique index backstops the race between
        // the check and the insert.
        if self.db.students.find_by_email(&request.email).await?.is_some() {
            return Err(CampusError::DuplicateEmail { email: request.email });
        }

        let email = request.email.clone();
        let student = match self.db.students.create(college_id, request).await {
            Ok(student) => student,
            Err(err) if err.is_unique_violation() => {
                return Err(CampusError::DuplicateEmail { email });
            }
            Err(err) => return Err(err),
        };

        info!(student_id = student.id, college_id = college_id, "Student created");
        Ok(student)
    }

    /// List students of a college
    pub async fn list_students(&self, college_id: i64) -> Result<Vec<Student>> {
        debug!(college_id = college_id, "Listing students");
        self.db.students.list_by_college(college_id).await
    }

    /// Create a new event under a college
    pub async fn create_event(
        &self,
        college_id: i64,
        request: CreateEventRequest,
    ) -> Result<Event> {
        validate_event_window(request.start_datetime, request.end_datetime)?;
        if let Some(capacity) = request.max_capacity {
            validate_capacity(capacity)?;
        }

        if !self.db.colleges.exists(college_id).await? {
            return Err(CampusError::CollegeNotFound { college_id });
        }

        let event = self.db.events.create(college_id, request).await?;
        info!(event_id = event.id, college_id = college_id, "Event created");

        Ok(event)
    }

    /// List events of a college
    pub async fn list_events(&self, college_id: i64) -> Result<Vec<Event>> {
        debug!(college_id = college_id, "Listing events");
        self.db.events.list_by_college(college_id).await
    }

    /// Fetch a single event
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        self.db
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(CampusError::EventNotFound { event_id })
    }
}

/// Reject events that end before they start
pub fn validate_event_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    if end < start {
        return Err(CampusError::Validation(
            "Event end must not be before its start".to_string(),
        ));
    }
    Ok(())
}

/// Reject non-positive event capacities
pub fn validate_capacity(max_capacity: i32) -> Result<()> {
    if max_capacity <= 0 {
        return Err(CampusError::Validation(
            "Max capacity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_window_rejects_end_before_start() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        assert!(validate_event_window(start, end).is_err());
    }

    #[test]
    fn test_event_window_accepts_zero_length() {
        let at = Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap();
        assert!(validate_event_window(at, at).is_ok());
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(-5).is_err());
        assert!(validate_capacity(1).is_ok());
        assert!(validate_capacity(100).is_ok());
    }
}
