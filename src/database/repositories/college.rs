//! College repository implementation

use sqlx::PgPool;

use crate::models::college::{College, CreateCollegeRequest};
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct CollegeRepository {
    pool: PgPool,
}

impl CollegeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new college
    pub async fn create(&self, request: CreateCollegeRequest) -> Result<College, CampusError> {
        let college = sqlx::query_as::<_, College>(
            r#"
            INSERT INTO colleges (name, location, contact_email)
            VALUES ($1, $2, $3)
            RETURNING id, name, location, contact_email, created_at
            "#
        )
        .bind(request.name)
        .bind(request.location)
        .bind(request.contact_email)
        .fetch_one(&self.pool)
        .await?;

        Ok(college)
    }

    /// Find college by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<College>, CampusError> {
        let college = sqlx::query_as::<_, College>(
            "SELECT id, name, location, contact_email, created_at FROM colleges WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(college)
    }

    /// Check if a college exists
    pub async fn exists(&self, id: i64) -> Result<bool, CampusError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colleges WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }

    /// List all colleges
    pub async fn list(&self) -> Result<Vec<College>, CampusError> {
        let colleges = sqlx::query_as::<_, College>(
            "SELECT id, name, location, contact_email, created_at FROM colleges ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(colleges)
    }

    /// Count total colleges
    pub async fn count(&self) -> Result<i64, CampusError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colleges")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
