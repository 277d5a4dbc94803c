//! Visit recap service
//!
//! Reads the whole log back and derives visit statistics from the timestamp
//! column. Rows whose timestamp cannot be read still count as visits but do
//! not contribute any date.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::{
    error::AppResult,
    models::{LogRow, RecapResult},
    repository::Repository,
    timestamp::parse_log_timestamp,
};

#[derive(Clone)]
pub struct RecapService {
    repository: Repository,
}

impl RecapService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the recap, counting visits on `target_date` when given
    pub async fn compute(&self, target_date: Option<NaiveDate>) -> AppResult<RecapResult> {
        let rows = self.repository.visit_log.read_all_rows().await?;
        tracing::debug!("Computing recap over {} log rows", rows.len());
        Ok(summarize(&rows, target_date))
    }
}

/// Aggregate log rows into a recap
pub fn summarize(rows: &[LogRow], target_date: Option<NaiveDate>) -> RecapResult {
    let total_visits = rows.len() as u64;
    let mut matching = 0u64;
    let mut earliest: Option<NaiveDate> = None;
    // Keyed by date, so rows sharing a day collapse into one entry
    let mut dates = BTreeSet::new();

    for row in rows {
        let raw = row.timestamp();
        if raw.is_empty() {
            continue;
        }
        let Some(date) = parse_log_timestamp(raw) else {
            continue;
        };

        if earliest.map_or(true, |current| date < current) {
            earliest = Some(date);
        }
        dates.insert(date);
        if target_date == Some(date) {
            matching += 1;
        }
    }

    RecapResult {
        total_visits,
        filtered_visits: if target_date.is_some() { matching } else { total_visits },
        earliest_date: earliest,
        available_dates: dates.into_iter().rev().collect(),
    }
}
