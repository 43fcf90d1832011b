//! Services module
//!
//! This module contains business logic services

pub mod directory;
pub mod registration;

// Re-export commonly used services
pub use directory::DirectoryService;
pub use registration::RegistrationService;
