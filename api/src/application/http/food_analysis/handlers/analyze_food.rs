use axum::extract::State;
use nutrimatch_core::domain::food_analysis::{
    entities::AnalysisResult,
    ports::FoodAnalysisService,
    value_objects::{AnalyzeFoodInput, LabelImage},
};
use validator::Validate;

use crate::application::http::{
    food_analysis::validators::AnalyzeFoodRequest,
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
    path = "/analyze",
    tag = "food-analysis",
    summary = "Analyze an ingredient list or a label picture",
    description = "Scores the ingredients against the selected profile. An uploaded image takes precedence over the ingredients text.",
    request_body(content = AnalyzeFoodRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse)
    )
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<Response<AnalysisResult>, ApiError> {
    let request = AnalyzeFoodRequest {
        profile_id: payload.required_text("profile_id")?,
        ingredients: payload.text("ingredients"),
        allergies: payload.text("allergies"),
        image: None,
    };
    request.validate()?;

    let image = payload
        .take_file("image")
        .map(|file| LabelImage::new(file.data, file.content_type));

    let result = state
        .service
        .analyze_food(AnalyzeFoodInput {
            profile_id: request.profile_id,
            ingredients: request.ingredients,
            image,
            allergies: request.allergies,
        })
        .await?;

    Ok(Response::OK(result))
}
