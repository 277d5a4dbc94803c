//! Repository layer for the visit log
//!
//! The log lives in an external append-only table. Services only see the
//! [`VisitLogRepository`] port; the Google Sheets adapter is used in
//! production and the in-memory one in tests.

pub mod memory;
pub mod sheets;

use async_trait::async_trait;
use std::sync::Arc;

use crate::{error::AppResult, models::LogRow};

/// Storage port for the visit log
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitLogRepository: Send + Sync {
    /// Append one row at the end of the log
    async fn append_row(&self, row: &LogRow) -> AppResult<()>;

    /// Read every row currently in the log, in sheet order
    async fn read_all_rows(&self) -> AppResult<Vec<LogRow>>;
}

/// Main repository struct holding the storage adapters
#[derive(Clone)]
pub struct Repository {
    pub visit_log: Arc<dyn VisitLogRepository>,
}

impl Repository {
    /// Create a new repository around a visit log adapter
    pub fn new(visit_log: Arc<dyn VisitLogRepository>) -> Self {
        Self { visit_log }
    }
}
