use axum::extract::State;
use nutrimatch_core::domain::persona::{
    entities::Persona,
    ports::PersonaService,
    value_objects::{CustomPersonaInput, DEFAULT_CUSTOM_NAME},
};

use crate::application::http::{
    persona::validators::CustomProfileRequest,
    server::{
        api_entities::{api_error::ApiError, form::FormPayload, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/custom-profile",
    tag = "persona",
    summary = "Build a one-off custom profile",
    description = "Blank fields fall back to defaults. The profile is not stored.",
    request_body(
        content = CustomProfileRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = Persona)
    )
)]
pub async fn create_custom_profile(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<Response<Persona>, ApiError> {
    let persona = state.service.build_custom_persona(CustomPersonaInput {
        name: payload.text_or("name", DEFAULT_CUSTOM_NAME),
        goals: payload.text_or("goals", ""),
        allergies: payload.text_or("allergies", ""),
    });

    Ok(Response::OK(persona))
}
