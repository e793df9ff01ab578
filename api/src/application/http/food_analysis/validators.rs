use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MAX_INGREDIENTS_LENGTH: u64 = 5000;

/// Form fields of `POST /analyze`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeFoodRequest {
    #[schema(example = "keto")]
    pub profile_id: String,
    #[validate(length(
        max = 5000,
        message = "ingredients must be at most 5000 characters"
    ))]
    #[schema(example = "sugar, wheat flour, water")]
    pub ingredients: Option<String>,
    #[schema(example = "peanuts, soy")]
    pub allergies: Option<String>,
    /// Picture of the ingredient label.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Form fields of `POST /analyze/text`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeFoodTextRequest {
    #[schema(example = "keto")]
    pub profile_id: String,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients must be between 1 and 5000 characters"
    ))]
    #[schema(example = "sugar, wheat flour, water")]
    pub ingredients: String,
    pub allergies: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum AvailableModelsResponse {
    Models { models: Vec<String> },
    Error { error: String },
}
