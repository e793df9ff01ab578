use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::entities::{HistoryRecord, HistorySnapshot},
};

/// Storage for the bounded scan history.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    /// Appends a record, evicting the oldest ones beyond capacity.
    fn record(&self, record: HistoryRecord) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Returns the newest `limit` records in insertion order together with the
    /// number of records currently retained.
    fn recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<HistorySnapshot, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HistoryService: Send + Sync {
    fn get_recent_history(&self) -> impl Future<Output = Result<HistorySnapshot, CoreError>> + Send;
}
