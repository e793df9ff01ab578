use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::AnalysisResult,
        value_objects::{AnalyzeFoodInput, AnalyzeFoodTextInput, LabelImage},
    },
    persona::entities::Persona,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends an instruction together with an inline image and returns the raw
    /// text of the first candidate.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn list_models(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Full pipeline: persona lookup, input arbitration, optional label text
    /// extraction, analysis and history bookkeeping.
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn analyze_food_text(
        &self,
        input: AnalyzeFoodTextInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    /// Turns a label picture into text, honoring the configured extraction policy.
    fn extract_label_text(
        &self,
        image: LabelImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Never fails: any model or parsing problem yields the mock analysis.
    fn analyze_ingredients(
        &self,
        ingredients: String,
        persona: Persona,
    ) -> impl Future<Output = AnalysisResult> + Send;

    fn list_available_models(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
