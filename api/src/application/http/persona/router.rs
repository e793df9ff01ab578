use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_custom_profile::{__path_create_custom_profile, create_custom_profile},
    get_personas::{__path_get_personas, get_personas},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_personas, create_custom_profile))]
pub struct PersonaApiDoc;

pub fn persona_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/personas"), get(get_personas))
        .route(
            &format!("{root_path}/custom-profile"),
            post(create_custom_profile),
        )
}
