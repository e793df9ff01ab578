use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_health::{__path_get_health, get_health},
    get_service_info::{__path_get_service_info, get_service_info},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_service_info, get_health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let index = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new()
        .route(&index, get(get_service_info))
        .route(&format!("{root_path}/health"), get(get_health))
}
