use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::entities::IngredientEntry;

/// Personalized assessment of one ingredient list.
///
/// Both the model backed path and the mock fallback produce this exact shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub personal_match: u8,
    pub quality_score: u8,
    pub fuel_percent: u8,
    pub filler_percent: u8,
    pub risk_percent: u8,
    pub conflicts: Vec<String>,
    pub deceptions: Vec<String>,
    pub ingredients: Vec<IngredientEntry>,
    pub persona_used: String,
    pub ingredients_analyzed: u32,
}

impl AnalysisResult {
    pub fn percentages(&self) -> [u8; 5] {
        [
            self.personal_match,
            self.quality_score,
            self.fuel_percent,
            self.filler_percent,
            self.risk_percent,
        ]
    }
}
