use axum::extract::State;
use nutrimatch_core::domain::food_analysis::{
    entities::AnalysisResult, ports::FoodAnalysisService, value_objects::AnalyzeFoodTextInput,
};
use validator::Validate;

use crate::application::http::{
    food_analysis::validators::AnalyzeFoodTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            form::FormPayload,
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze/text",
    tag = "food-analysis",
    summary = "Analyze an ingredient list",
    request_body(
        content = AnalyzeFoodTextRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse)
    )
)]
pub async fn analyze_food_text(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<Response<AnalysisResult>, ApiError> {
    let request = AnalyzeFoodTextRequest {
        profile_id: payload.required_text("profile_id")?,
        ingredients: payload.required_text("ingredients")?,
        allergies: payload.text("allergies"),
    };
    request.validate()?;

    let result = state
        .service
        .analyze_food_text(AnalyzeFoodTextInput {
            profile_id: request.profile_id,
            ingredients: request.ingredients,
            allergies: request.allergies,
        })
        .await?;

    Ok(Response::OK(result))
}
