//! Reporting module
//!
//! The aggregate reports: a pure computation engine plus a service that
//! feeds it store snapshots

pub mod engine;
pub mod service;

pub use engine::{
    AnalyticsFilter, EventAnalyticsRow, EventPopularityRow, StudentParticipationRow,
    TopActiveStudentRow,
};
pub use service::{
    EventAnalyticsReport, EventPopularityReport, ReportService, StudentParticipationReport,
    TopActiveStudentsReport,
};
