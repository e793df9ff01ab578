use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    history::{
        entities::HistorySnapshot,
        ports::{HistoryRepository, HistoryService},
    },
};

impl<LLM, H> HistoryService for Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    #[instrument(skip(self))]
    async fn get_recent_history(&self) -> Result<HistorySnapshot, CoreError> {
        self.history_repository
            .recent(self.settings.recent_limit)
            .await
    }
}
