//! Event repository implementation

use sqlx::{PgPool, Postgres, Transaction};

use crate::models::event::{CreateEventRequest, Event, DEFAULT_MAX_CAPACITY};
use crate::utils::errors::CampusError;

const EVENT_COLUMNS: &str = "id, college_id, title, description, event_type, start_datetime, end_datetime, location, max_capacity, current_registrations, status, created_at";

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event for a college
    pub async fn create(
        &self,
        college_id: i64,
        request: CreateEventRequest,
    ) -> Result<Event, CampusError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (college_id, title, description, event_type, start_datetime, end_datetime, location, max_capacity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, college_id, title, description, event_type, start_datetime, end_datetime, location, max_capacity, current_registrations, status, created_at
            "#
        )
        .bind(college_id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.event_type)
        .bind(request.start_datetime)
        .bind(request.end_datetime)
        .bind(request.location)
        .bind(request.max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY))
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, CampusError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Find event by ID with the row locked for the duration of the
    /// transaction. Serializes concurrent registrations against the same
    /// event so the capacity check and counter increment stay consistent.
    pub async fn find_by_id_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Option<Event>, CampusError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 FOR UPDATE");
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(event)
    }

    /// Increment the denormalized registration counter within the same
    /// transaction that inserts the registration row
    pub async fn increment_registrations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<(), CampusError> {
        sqlx::query("UPDATE events SET current_registrations = current_registrations + 1 WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// List events belonging to a college
    pub async fn list_by_college(&self, college_id: i64) -> Result<Vec<Event>, CampusError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE college_id = $1 ORDER BY id ASC");
        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(college_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    /// List all events across colleges
    pub async fn list_all(&self) -> Result<Vec<Event>, CampusError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id ASC");
        let events = sqlx::query_as::<_, Event>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    /// Count registration rows for an event. Used by tests and consistency
    /// checks to compare against the stored counter.
    pub async fn registration_count(&self, event_id: i64) -> Result<i64, CampusError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM registrations WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
