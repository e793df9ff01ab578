use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoryRecord, HistorySnapshot},
        ports::HistoryRepository,
    },
};

/// Process-local scan history. Starts empty and is lost on restart.
#[derive(Debug)]
pub struct InMemoryHistoryRepository {
    capacity: usize,
    entries: Mutex<VecDeque<HistoryRecord>>,
}

impl InMemoryHistoryRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity + 1)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, VecDeque<HistoryRecord>>, CoreError> {
        self.entries.lock().map_err(|e| {
            tracing::error!("History lock poisoned: {}", e);
            CoreError::InternalServerError
        })
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    async fn record(&self, record: HistoryRecord) -> Result<(), CoreError> {
        let mut entries = self.lock()?;

        entries.push_back(record);
        while entries.len() > self.capacity {
            entries.pop_front();
        }

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<HistorySnapshot, CoreError> {
        let entries = self.lock()?;

        let skip = entries.len().saturating_sub(limit);

        Ok(HistorySnapshot {
            recent_scans: entries.iter().skip(skip).cloned().collect(),
            total_scans: entries.len(),
        })
    }
}
