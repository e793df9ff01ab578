use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_history::{__path_get_history, get_history};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_history))]
pub struct HistoryApiDoc;

pub fn history_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/history"), get(get_history))
}
