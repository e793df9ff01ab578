use axum::extract::State;
use nutrimatch_core::domain::persona::{entities::Persona, ports::PersonaService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/personas",
    tag = "persona",
    summary = "List the built-in health profiles",
    responses(
        (status = 200, body = Vec<Persona>)
    )
)]
pub async fn get_personas(
    State(state): State<AppState>,
) -> Result<Response<Vec<Persona>>, ApiError> {
    Ok(Response::OK(state.service.list_personas()))
}
