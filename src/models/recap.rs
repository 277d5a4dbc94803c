//! Visit recap model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Aggregate statistics over the whole visit log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecapResult {
    /// Number of rows in the log, including rows without a readable date
    pub total_visits: u64,
    /// Rows dated on the requested day, or `total_visits` when no day was requested
    pub filtered_visits: u64,
    /// Oldest date found in the log
    #[schema(value_type = Option<String>, example = "2024-01-15")]
    pub earliest_date: Option<NaiveDate>,
    /// Distinct dates found in the log, most recent first
    #[schema(value_type = Vec<String>, example = json!(["2025-10-03", "2024-01-15"]))]
    pub available_dates: Vec<NaiveDate>,
}

/// Query parameters for the visit recap
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RecapQuery {
    /// Day to count visits for (YYYY-MM-DD)
    pub date: Option<String>,
}

impl RecapQuery {
    /// Parsed target day; an empty value means no filter
    pub fn target_date(&self) -> AppResult<Option<NaiveDate>> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| AppError::Validation("Invalid date format, expected YYYY-MM-DD".to_string())),
        }
    }
}
