use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

pub const FEATURES: &str = "Custom profiles, image upload, text analysis";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub features: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "healthy".to_string(),
        features: FEATURES.to_string(),
    })
}
