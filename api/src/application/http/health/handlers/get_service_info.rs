use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub features: Vec<String>,
    /// Route to short description.
    pub endpoints: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service descriptor",
    responses(
        (status = 200, body = ServiceInfoResponse)
    )
)]
pub async fn get_service_info() -> Response<ServiceInfoResponse> {
    let endpoints = [
        ("/personas", "Get available health personas"),
        ("/custom-profile", "Create a custom health profile"),
        ("/analyze", "Analyze food by image or ingredients text"),
        ("/analyze/text", "Analyze an ingredient list"),
        ("/history", "Get recent scan history"),
        ("/available-models", "List the models of the configured provider"),
        ("/health", "Health check"),
    ]
    .into_iter()
    .map(|(path, description)| (path.to_string(), description.to_string()))
    .collect();

    Response::OK(ServiceInfoResponse {
        message: "NutriMatch API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: [
            "Custom health profiles",
            "Label image upload",
            "Ingredient text analysis",
            "Fuel, filler and risk breakdown",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        endpoints,
    })
}
