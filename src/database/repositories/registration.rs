//! Registration repository implementation
//!
//! Covers the registration aggregate: registration rows plus their
//! attendance and feedback children. Mutations that must share a
//! transaction with other statements take the transaction explicitly.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::registration::{Attendance, Feedback, Registration, RegistrationStatus};
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a registration row within an open transaction
    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event_id: i64,
        student_id: i64,
    ) -> Result<Registration, CampusError> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (event_id, student_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, student_id, registration_time, status
            "#
        )
        .bind(event_id)
        .bind(student_id)
        .bind(RegistrationStatus::Registered.as_str())
        .fetch_one(&mut **tx)
        .await?;

        Ok(registration)
    }

    /// Find registration by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, CampusError> {
        let registration = sqlx::query_as::<_, Registration>(
            "SELECT id, event_id, student_id, registration_time, status FROM registrations WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Check if a student is registered for an event, within an open
    /// transaction so the answer is consistent with the event row lock
    pub async fn is_registered_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event_id: i64,
        student_id: i64,
    ) -> Result<bool, CampusError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM registrations WHERE event_id = $1 AND student_id = $2"
        )
        .bind(event_id)
        .bind(student_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(count.0 > 0)
    }

    /// Update registration status within an open transaction
    pub async fn set_status_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<(), CampusError> {
        sqlx::query("UPDATE registrations SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// List all registrations
    pub async fn list_all(&self) -> Result<Vec<Registration>, CampusError> {
        let registrations = sqlx::query_as::<_, Registration>(
            "SELECT id, event_id, student_id, registration_time, status FROM registrations ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    /// Insert an attendance row within an open transaction
    pub async fn create_attendance_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration_id: i64,
        check_in_time: DateTime<Utc>,
    ) -> Result<Attendance, CampusError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (registration_id, check_in_time)
            VALUES ($1, $2)
            RETURNING id, registration_id, check_in_time, check_out_time, created_at
            "#
        )
        .bind(registration_id)
        .bind(check_in_time)
        .fetch_one(&mut **tx)
        .await?;

        Ok(attendance)
    }

    /// Find the attendance row for a registration, if any
    pub async fn find_attendance(
        &self,
        registration_id: i64,
    ) -> Result<Option<Attendance>, CampusError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "SELECT id, registration_id, check_in_time, check_out_time, created_at FROM attendance WHERE registration_id = $1"
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(attendance)
    }

    /// List all attendance rows
    pub async fn list_all_attendance(&self) -> Result<Vec<Attendance>, CampusError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "SELECT id, registration_id, check_in_time, check_out_time, created_at FROM attendance ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(attendance)
    }

    /// Insert a feedback row within an open transaction
    pub async fn create_feedback_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration_id: i64,
        rating: i32,
        comments: Option<String>,
    ) -> Result<Feedback, CampusError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (registration_id, rating, comments)
            VALUES ($1, $2, $3)
            RETURNING id, registration_id, rating, comments, submitted_at
            "#
        )
        .bind(registration_id)
        .bind(rating)
        .bind(comments)
        .fetch_one(&mut **tx)
        .await?;

        Ok(feedback)
    }

    /// Find the feedback row for a registration, if any
    pub async fn find_feedback(
        &self,
        registration_id: i64,
    ) -> Result<Option<Feedback>, CampusError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, registration_id, rating, comments, submitted_at FROM feedback WHERE registration_id = $1"
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(feedback)
    }

    /// List all feedback rows
    pub async fn list_all_feedback(&self) -> Result<Vec<Feedback>, CampusError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, registration_id, rating, comments, submitted_at FROM feedback ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(feedback)
    }

    /// Count attendance rows for a registration
    pub async fn attendance_count(&self, registration_id: i64) -> Result<i64, CampusError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attendance WHERE registration_id = $1"
        )
        .bind(registration_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
