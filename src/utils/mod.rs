//! Utility modules
//!
//! Error types and logging setup shared across the application

pub mod errors;
pub mod logging;

pub use errors::{CampusError, Result};
