use std::{sync::Arc, time::Duration};

use crate::domain::{
    food_analysis::{ports::LLMClient, value_objects::ExtractionPolicy},
    history::ports::HistoryRepository,
    persona::{catalog::builtin_personas, entities::Persona},
};

/// Runtime knobs of the analysis pipeline.
#[derive(Clone, Debug)]
pub struct AnalysisSettings {
    pub extraction_policy: ExtractionPolicy,
    pub llm_timeout: Duration,
    pub recent_limit: usize,
}

pub struct Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) history_repository: Arc<H>,
    pub(crate) personas: Arc<[Persona]>,
    pub(crate) settings: AnalysisSettings,
}

impl<LLM, H> Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    pub fn new(llm_client: LLM, history_repository: H, settings: AnalysisSettings) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            history_repository: Arc::new(history_repository),
            personas: builtin_personas().into(),
            settings,
        }
    }
}

impl<LLM, H> Clone for Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            history_repository: Arc::clone(&self.history_repository),
            personas: Arc::clone(&self.personas),
            settings: self.settings.clone(),
        }
    }
}
