//! Data models module
//!
//! Entity structs for the six persisted tables plus the request payloads
//! accepted by the write operations

pub mod college;
pub mod event;
pub mod registration;
pub mod student;

pub use college::{College, CreateCollegeRequest};
pub use event::{CreateEventRequest, Event, EventStatus, DEFAULT_MAX_CAPACITY};
pub use registration::{
    Attendance, Feedback, Registration, RegistrationStatus, SubmitFeedbackRequest,
};
pub use student::{CreateStudentRequest, Student};
