//! HTTP handlers module

pub mod colleges;
pub mod events;
pub mod health;
pub mod registrations;
pub mod reports;
pub mod students;
