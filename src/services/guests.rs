//! Guest book ingestion service

use crate::{
    error::AppResult,
    models::{GuestEntry, SubmitGuestRequest},
    repository::Repository,
    timestamp::now_log_timestamp,
};

#[derive(Clone)]
pub struct GuestsService {
    repository: Repository,
}

impl GuestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate a submission and append it to the visit log.
    ///
    /// Nothing reaches the log unless every required field is present.
    pub async fn submit(&self, request: SubmitGuestRequest) -> AppResult<()> {
        let entry = GuestEntry::try_from(request)?;
        let row = entry.into_log_row(now_log_timestamp());

        self.repository.visit_log.append_row(&row).await?;

        tracing::info!("Guest entry saved to visit log at {}", row.timestamp());
        Ok(())
    }
}
