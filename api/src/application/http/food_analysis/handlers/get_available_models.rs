use axum::extract::State;
use nutrimatch_core::domain::food_analysis::ports::FoodAnalysisService;

use crate::application::http::{
    food_analysis::validators::AvailableModelsResponse,
    server::{api_entities::response::Response, app_state::AppState},
};

#[utoipa::path(
    get,
    path = "/available-models",
    tag = "food-analysis",
    summary = "List the models exposed by the configured provider",
    description = "Failures are reported in the body, the status stays 200.",
    responses(
        (status = 200, body = AvailableModelsResponse)
    )
)]
pub async fn get_available_models(
    State(state): State<AppState>,
) -> Response<AvailableModelsResponse> {
    match state.service.list_available_models().await {
        Ok(models) => Response::OK(AvailableModelsResponse::Models { models }),
        Err(e) => {
            tracing::warn!("Failed to list models: {}", e);
            Response::OK(AvailableModelsResponse::Error {
                error: e.to_string(),
            })
        }
    }
}
