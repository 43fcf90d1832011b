//! Database service layer
//!
//! Bundles the per-aggregate repositories behind one handle that the
//! business services and report engine share.

use crate::database::{
    CollegeRepository, DatabasePool, EventRepository, RegistrationRepository, StudentRepository,
};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub colleges: CollegeRepository,
    pub students: StudentRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            colleges: CollegeRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool),
        }
    }
}
