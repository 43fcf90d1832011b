//! Report service implementation
//!
//! Snapshots the entity tables through the repositories and hands them to
//! the pure engine functions. Reports never mutate state; each one reads
//! the tables it needs and computes everything in memory.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::database::DatabaseService;
use crate::reports::engine::{
    self, AnalyticsFilter, EventAnalyticsRow, EventPopularityRow, StudentParticipationRow,
    TopActiveStudentRow, DEFAULT_TOP_ACTIVE_LIMIT,
};
use crate::utils::errors::Result;
use crate::utils::logging::log_report_generated;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPopularityReport {
    pub report_type: String,
    pub total_events: usize,
    pub data: Vec<EventPopularityRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentParticipationReport {
    pub report_type: String,
    pub total_students: usize,
    pub data: Vec<StudentParticipationRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopActiveStudentsReport {
    pub report_type: String,
    pub data: Vec<TopActiveStudentRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAnalyticsReport {
    pub report_type: String,
    pub filters: AnalyticsFilter,
    pub total_events: usize,
    pub data: Vec<EventAnalyticsRow>,
}

/// Report service exposing the read-only aggregate queries
#[derive(Debug, Clone)]
pub struct ReportService {
    db: DatabaseService,
}

impl ReportService {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Events ranked by registration count
    pub async fn event_popularity(&self) -> Result<EventPopularityReport> {
        let started = Instant::now();
        let events = self.db.events.list_all().await?;
        let colleges = self.db.colleges.list().await?;

        let data = engine::event_popularity(&events, &colleges);
        log_report_generated("event_popularity", data.len(), started.elapsed().as_millis() as u64);

        Ok(EventPopularityReport {
            report_type: "Event Popularity".to_string(),
            total_events: data.len(),
            data,
        })
    }

    /// Registration and attendance totals for every student
    pub async fn student_participation(&self) -> Result<StudentParticipationReport> {
        let started = Instant::now();
        let students = self.db.students.list_all().await?;
        let colleges = self.db.colleges.list().await?;
        let registrations = self.db.registrations.list_all().await?;
        let attendance = self.db.registrations.list_all_attendance().await?;

        let data = engine::student_participation(&students, &colleges, &registrations, &attendance);
        log_report_generated(
            "student_participation",
            data.len(),
            started.elapsed().as_millis() as u64,
        );

        Ok(StudentParticipationReport {
            report_type: "Student Participation".to_string(),
            total_students: data.len(),
            data,
        })
    }

    /// Most active students by events attended
    pub async fn top_active_students(&self, limit: Option<usize>) -> Result<TopActiveStudentsReport> {
        let started = Instant::now();
        let limit = limit.unwrap_or(DEFAULT_TOP_ACTIVE_LIMIT);

        let students = self.db.students.list_all().await?;
        let colleges = self.db.colleges.list().await?;
        let registrations = self.db.registrations.list_all().await?;
        let attendance = self.db.registrations.list_all_attendance().await?;

        let data =
            engine::top_active_students(&students, &colleges, &registrations, &attendance, limit);
        log_report_generated("top_active_students", data.len(), started.elapsed().as_millis() as u64);

        Ok(TopActiveStudentsReport {
            report_type: format!("Top {limit} Most Active Students"),
            data,
        })
    }

    /// Per-event attendance and rating aggregates with optional filters
    pub async fn event_analytics(&self, filter: AnalyticsFilter) -> Result<EventAnalyticsReport> {
        let started = Instant::now();
        let events = self.db.events.list_all().await?;
        let colleges = self.db.colleges.list().await?;
        let registrations = self.db.registrations.list_all().await?;
        let attendance = self.db.registrations.list_all_attendance().await?;
        let feedback = self.db.registrations.list_all_feedback().await?;

        let data = engine::event_analytics(
            &events,
            &colleges,
            &registrations,
            &attendance,
            &feedback,
            &filter,
        );
        log_report_generated("event_analytics", data.len(), started.elapsed().as_millis() as u64);

        Ok(EventAnalyticsReport {
            report_type: "Event Analytics".to_string(),
            filters: filter,
            total_events: data.len(),
            data,
        })
    }
}
