use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomProfileRequest {
    #[schema(example = "peanuts, shellfish")]
    pub allergies: Option<String>,
    #[schema(example = "lose weight")]
    pub goals: Option<String>,
    #[schema(example = "My Plan")]
    pub name: Option<String>,
}
