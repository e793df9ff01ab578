use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_food::{__path_analyze_food, analyze_food},
    analyze_food_text::{__path_analyze_food_text, analyze_food_text},
    get_available_models::{__path_get_available_models, get_available_models},
};
use crate::application::http::server::{api_entities::form::MAX_UPLOAD_SIZE, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(analyze_food, analyze_food_text, get_available_models))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/analyze"), post(analyze_food))
        .route(&format!("{root_path}/analyze/text"), post(analyze_food_text))
        .route(
            &format!("{root_path}/available-models"),
            get(get_available_models),
        )
        // Room for the multipart envelope around a maximal upload.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 2 * 1024 * 1024))
}
