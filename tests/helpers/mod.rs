//! Test database helper utilities
//!
//! Connects to the database named by `TEST_DATABASE_URL` and provides
//! fixture seeding for the integration suite. When the variable is unset
//! or the database is unreachable the suite skips itself, so the tests
//! stay runnable in environments without Postgres.

use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;

use campus_events::database::DatabaseService;
use campus_events::models::college::{College, CreateCollegeRequest};
use campus_events::models::event::{CreateEventRequest, Event};
use campus_events::models::student::{CreateStudentRequest, Student};

pub struct TestDatabase {
    pub pool: PgPool,
    pub db: DatabaseService,
}

impl TestDatabase {
    /// Connect to the test database, returning `None` when unavailable
    pub async fn connect() -> Option<Self> {
        let url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set, skipping database test");
                return None;
            }
        };

        let pool = match PgPool::connect(&url).await {
            Ok(pool) => pool,
            Err(err) => {
                eprintln!("Test database unreachable ({err}), skipping database test");
                return None;
            }
        };

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on test database");

        let db = DatabaseService::new(pool.clone());
        Some(Self { pool, db })
    }

    /// Clean all test data from the database, children first
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM feedback").execute(&self.pool).await?;
        sqlx::query("DELETE FROM attendance").execute(&self.pool).await?;
        sqlx::query("DELETE FROM registrations").execute(&self.pool).await?;
        sqlx::query("DELETE FROM events").execute(&self.pool).await?;
        sqlx::query("DELETE FROM students").execute(&self.pool).await?;
        sqlx::query("DELETE FROM colleges").execute(&self.pool).await?;

        Ok(())
    }

    /// Seed a college fixture
    pub async fn seed_college(&self, name: &str) -> College {
        self.db
            .colleges
            .create(CreateCollegeRequest {
                name: name.to_string(),
                location: Some("Test City".to_string()),
                contact_email: None,
            })
            .await
            .expect("Failed to seed college")
    }

    /// Seed a student fixture with a unique email
    pub async fn seed_student(&self, college_id: i64, code: &str) -> Student {
        self.db
            .students
            .create(
                college_id,
                CreateStudentRequest {
                    student_code: code.to_string(),
                    name: format!("Student {code}"),
                    email: format!("{code}@test.campus.edu"),
                    phone: None,
                    year: Some(2),
                    department: Some("Engineering".to_string()),
                },
            )
            .await
            .expect("Failed to seed student")
    }

    /// Seed an event fixture with the given capacity
    pub async fn seed_event(&self, college_id: i64, title: &str, max_capacity: i32) -> Event {
        let start = Utc.with_ymd_and_hms(2026, 9, 15, 10, 0, 0).unwrap();
        self.db
            .events
            .create(
                college_id,
                CreateEventRequest {
                    title: title.to_string(),
                    description: None,
                    event_type: "Workshop".to_string(),
                    start_datetime: start,
                    end_datetime: start + Duration::hours(3),
                    location: None,
                    max_capacity: Some(max_capacity),
                },
            )
            .await
            .expect("Failed to seed event")
    }
}
