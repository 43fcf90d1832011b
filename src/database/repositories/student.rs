//! Student repository implementation

use sqlx::PgPool;

use crate::models::student::{CreateStudentRequest, Student};
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new student for a college
    pub async fn create(
        &self,
        college_id: i64,
        request: CreateStudentRequest,
    ) -> Result<Student, CampusError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (college_id, student_code, name, email, phone, year, department)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, college_id, student_code, name, email, phone, year, department, created_at
            "#
        )
        .bind(college_id)
        .bind(request.student_code)
        .bind(request.name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.year)
        .bind(request.department)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    /// Find student by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>, CampusError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, college_id, student_code, name, email, phone, year, department, created_at FROM students WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Find student by email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, CampusError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, college_id, student_code, name, email, phone, year, department, created_at FROM students WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// List students belonging to a college
    pub async fn list_by_college(&self, college_id: i64) -> Result<Vec<Student>, CampusError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, college_id, student_code, name, email, phone, year, department, created_at FROM students WHERE college_id = $1 ORDER BY id ASC"
        )
        .bind(college_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// List all students across colleges
    pub async fn list_all(&self) -> Result<Vec<Student>, CampusError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, college_id, student_code, name, email, phone, year, department, created_at FROM students ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }
}
