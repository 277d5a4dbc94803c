//! Business logic services

pub mod guests;
pub mod recap;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub guests: guests::GuestsService,
    pub recap: recap::RecapService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            guests: guests::GuestsService::new(repository.clone()),
            recap: recap::RecapService::new(repository),
        }
    }
}
