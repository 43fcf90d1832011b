//! Configuration module
//!
//! This module handles application configuration loading and validation

pub mod settings;
pub mod validation;

pub use settings::{DatabaseConfig, LoggingConfig, ServerConfig, Settings};
