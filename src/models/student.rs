//! Student model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub college_id: i64,
    pub student_code: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub year: Option<i32>,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub student_code: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub year: Option<i32>,
    pub department: Option<String>,
}
