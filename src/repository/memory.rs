//! In-memory visit log

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::AppResult, models::LogRow};

use super::VisitLogRepository;

/// Visit log kept in process memory, for tests and local runs
#[derive(Debug, Default)]
pub struct InMemoryVisitLog {
    rows: RwLock<Vec<LogRow>>,
}

impl InMemoryVisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing rows
    pub fn with_rows(rows: Vec<LogRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Snapshot of the stored rows
    pub async fn rows(&self) -> Vec<LogRow> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl VisitLogRepository for InMemoryVisitLog {
    async fn append_row(&self, row: &LogRow) -> AppResult<()> {
        self.rows.write().await.push(row.clone());
        Ok(())
    }

    async fn read_all_rows(&self) -> AppResult<Vec<LogRow>> {
        Ok(self.rows().await)
    }
}
