use utoipa::OpenApi;

use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, health::router::HealthApiDoc,
    history::router::HistoryApiDoc, persona::router::PersonaApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriMatch API",
        description = "Personalized food label analysis"
    ),
    components(schemas(ApiErrorResponse))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group, paths prefixed with `root_path`.
    pub fn build(root_path: &str) -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi()
            .merge_from(HealthApiDoc::openapi())
            .merge_from(PersonaApiDoc::openapi())
            .merge_from(FoodAnalysisApiDoc::openapi())
            .merge_from(HistoryApiDoc::openapi());

        let mut paths = openapi.paths.clone();
        paths.paths = openapi
            .paths
            .paths
            .into_iter()
            .map(|(path, item)| (format!("{root_path}{path}"), item))
            .collect();
        openapi.paths = paths;

        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_prefixed() {
        let openapi = ApiDoc::build("/api");

        assert!(openapi.paths.paths.contains_key("/api/analyze/text"));
        assert!(openapi.paths.paths.contains_key("/api/personas"));
    }
}
