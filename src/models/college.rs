//! College model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct College {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollegeRequest {
    pub name: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
}
