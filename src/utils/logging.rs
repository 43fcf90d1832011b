//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for the campus events backend.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender guard; it must stay alive for the duration of the
/// process or buffered log lines are lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log registration lifecycle actions with structured data
pub fn log_registration_action(event_id: i64, student_id: i64, action: &str) {
    info!(
        event_id = event_id,
        student_id = student_id,
        action = action,
        "Registration action performed"
    );
}

/// Log report generation with row count and duration
pub fn log_report_generated(report: &str, rows: usize, duration_ms: u64) {
    debug!(
        report = report,
        rows = rows,
        duration_ms = duration_ms,
        "Report generated"
    );
}
