use crate::{
    domain::common::{
        NutriMatchConfig, entities::app_errors::CoreError,
        services::{AnalysisSettings, Service},
    },
    infrastructure::{history::InMemoryHistoryRepository, llm::GeminiLLMClient},
};

pub type NutriMatchService = Service<GeminiLLMClient, InMemoryHistoryRepository>;

pub async fn create_service(config: NutriMatchConfig) -> Result<NutriMatchService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let history_repository = InMemoryHistoryRepository::new(config.analysis.history_capacity);

    tracing::info!(
        model = %config.llm.gemini_model,
        vision_model = %config.llm.gemini_vision_model,
        llm_configured = llm_client.is_configured(),
        extraction_policy = %config.analysis.extraction_policy,
        history_capacity = config.analysis.history_capacity,
        "NutriMatch service initialized"
    );

    Ok(Service::new(
        llm_client,
        history_repository,
        AnalysisSettings {
            extraction_policy: config.analysis.extraction_policy,
            llm_timeout: config.llm.request_timeout,
            recent_limit: config.analysis.recent_limit,
        },
    ))
}
