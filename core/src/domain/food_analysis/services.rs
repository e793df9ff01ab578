use std::future::Future;

use tracing::{debug, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::AnalysisResult,
        extraction::validate_label_image,
        fallback::mock_analysis,
        helpers::parse_analysis_response,
        ports::{FoodAnalysisService, LLMClient},
        prompt::{LABEL_EXTRACTION_PROMPT, build_analysis_prompt},
        schema::get_analysis_schema,
        value_objects::{
            AnalyzeFoodInput, AnalyzeFoodTextInput, ExtractionPolicy, FALLBACK_LABEL_TEXT,
            IngredientSource, LabelImage,
        },
    },
    history::{entities::HistoryRecord, ports::HistoryRepository},
    persona::{entities::Persona, ports::PersonaService},
};

impl<LLM, H> Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    /// Bounds an external model call by the configured timeout.
    async fn call_model<T>(
        &self,
        what: &str,
        call: impl Future<Output = Result<T, CoreError>>,
    ) -> Result<T, CoreError> {
        tokio::time::timeout(self.settings.llm_timeout, call)
            .await
            .map_err(|_| CoreError::Timeout(what.to_string()))?
    }

    async fn try_extract_label_text(&self, image: &LabelImage) -> Result<String, CoreError> {
        let mime_type = validate_label_image(image).await?;

        let text = self
            .call_model(
                "label text extraction",
                self.llm_client.generate_with_image(
                    LABEL_EXTRACTION_PROMPT.to_string(),
                    image.data.to_vec(),
                    mime_type.to_string(),
                ),
            )
            .await
            .map_err(|e| CoreError::ExtractionFailed(e.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::ExtractionFailed(
                "model returned no text".to_string(),
            ));
        }

        Ok(text.to_string())
    }

    async fn try_analyze(
        &self,
        ingredients: &str,
        persona: &Persona,
    ) -> Result<AnalysisResult, CoreError> {
        let prompt = build_analysis_prompt(ingredients, persona);

        let raw_response = self
            .call_model(
                "ingredient analysis",
                self.llm_client
                    .generate_with_text(prompt, Some(get_analysis_schema())),
            )
            .await?;

        parse_analysis_response(&raw_response, persona)
    }

    async fn extract_with_policy(&self, image: &LabelImage) -> Result<String, CoreError> {
        match self.try_extract_label_text(image).await {
            Ok(text) => {
                debug!(chars = text.len(), "extracted label text");
                Ok(text)
            }
            Err(e) => match self.settings.extraction_policy {
                ExtractionPolicy::Fallback => {
                    warn!("Label text extraction failed, using fallback ingredients: {}", e);
                    Ok(FALLBACK_LABEL_TEXT.to_string())
                }
                ExtractionPolicy::Strict => {
                    warn!("Label text extraction failed: {}", e);
                    Err(e)
                }
            },
        }
    }

    async fn analyze_with_fallback(&self, ingredients: &str, persona: &Persona) -> AnalysisResult {
        match self.try_analyze(ingredients, persona).await {
            Ok(result) => {
                info!(
                    personal_match = result.personal_match,
                    ingredients = result.ingredients_analyzed,
                    "analysis completed"
                );
                result
            }
            Err(e) => {
                warn!("Analysis degraded, serving mock analysis: {}", e);
                mock_analysis(persona, ingredients)
            }
        }
    }

    async fn run_pipeline(&self, input: AnalyzeFoodInput) -> Result<AnalysisResult, CoreError> {
        let persona = self.resolve_persona(&input.profile_id);

        // Per-request copy, the catalog entry stays untouched.
        let persona = match input.allergies.as_deref() {
            Some(extra) if !extra.trim().is_empty() => persona.with_extra_allergies(extra),
            _ => persona,
        };

        let ingredient_text =
            match IngredientSource::select(input.ingredients.as_deref(), input.image.as_ref())? {
                IngredientSource::Image(image) => self.extract_with_policy(image).await?,
                IngredientSource::Text(text) => text.to_string(),
            };

        let result = self.analyze_with_fallback(&ingredient_text, &persona).await;

        if let Err(e) = self
            .history_repository
            .record(HistoryRecord::new(input.profile_id, result.personal_match))
            .await
        {
            warn!("Failed to record scan history: {}", e);
        }

        Ok(result)
    }
}

impl<LLM, H> FoodAnalysisService for Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<AnalysisResult, CoreError> {
        self.run_pipeline(input).await
    }

    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn analyze_food_text(
        &self,
        input: AnalyzeFoodTextInput,
    ) -> Result<AnalysisResult, CoreError> {
        if input.ingredients.trim().is_empty() {
            return Err(CoreError::MissingInput);
        }

        self.run_pipeline(input.into()).await
    }

    #[instrument(skip(self, image), fields(size = image.data.len()))]
    async fn extract_label_text(&self, image: LabelImage) -> Result<String, CoreError> {
        self.extract_with_policy(&image).await
    }

    #[instrument(skip(self, ingredients, persona), fields(persona = %persona.id))]
    async fn analyze_ingredients(&self, ingredients: String, persona: Persona) -> AnalysisResult {
        self.analyze_with_fallback(&ingredients, &persona).await
    }

    async fn list_available_models(&self) -> Result<Vec<String>, CoreError> {
        self.call_model("model listing", self.llm_client.list_models())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::{
        domain::{
            common::services::AnalysisSettings,
            food_analysis::{
                entities::Bucket,
                extraction::tests::{png_bytes, png_header_only},
                ports::MockLLMClient,
            },
            history::ports::{HistoryService, MockHistoryRepository},
            persona::catalog::builtin_personas,
        },
        infrastructure::history::InMemoryHistoryRepository,
    };

    fn settings(extraction_policy: ExtractionPolicy) -> AnalysisSettings {
        AnalysisSettings {
            extraction_policy,
            llm_timeout: Duration::from_millis(200),
            recent_limit: 3,
        }
    }

    fn model_response() -> String {
        format!(
            "Here you go:\n{}",
            json!({
                "personal_match": 30,
                "quality_score": 50,
                "fuel_percent": 10,
                "filler_percent": 40,
                "risk_percent": 50,
                "conflicts": ["Sugar conflicts with ketosis"],
                "deceptions": [],
                "ingredients": [
                    {
                        "name": "Sugar", "bucket": "risk", "impact": "Carbs",
                        "confidence": 95, "explanation": "Breaks ketosis"
                    },
                    {
                        "name": "Wheat flour", "bucket": "risk", "impact": "Carbs",
                        "confidence": 90, "explanation": "Grain"
                    },
                    {
                        "name": "Water", "bucket": "filler", "impact": "None",
                        "confidence": 99, "explanation": "Neutral"
                    }
                ]
            })
        )
    }

    fn failing_text_model() -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError("connection refused".to_string()))
            })
        });
        llm
    }

    fn accepting_history() -> MockHistoryRepository {
        let mut history = MockHistoryRepository::new();
        history
            .expect_record()
            .returning(|_| Box::pin(async { Ok(()) }));
        history
    }

    fn text_input(profile_id: &str, ingredients: &str) -> AnalyzeFoodInput {
        AnalyzeFoodInput {
            profile_id: profile_id.to_string(),
            ingredients: Some(ingredients.to_string()),
            image: None,
            allergies: None,
        }
    }

    #[tokio::test]
    async fn test_analyze_food_with_model_result() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("Keto (Low-Carb)")
                    && prompt.contains("sugar, wheat flour, water")
                    && schema.is_some()
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(model_response()) }));

        let mut history = MockHistoryRepository::new();
        history
            .expect_record()
            .withf(|record| record.profile == "keto" && record.match_score == 30)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = Service::new(llm, history, settings(ExtractionPolicy::Fallback));

        let result = service
            .analyze_food(text_input("keto", "sugar, wheat flour, water"))
            .await
            .unwrap();

        assert_eq!(result.persona_used, "Keto (Low-Carb)");
        assert_eq!(result.ingredients_analyzed, 3);
        assert_eq!(result.ingredients[2].bucket, Bucket::Filler);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_mock() {
        let service = Service::new(
            failing_text_model(),
            accepting_history(),
            settings(ExtractionPolicy::Fallback),
        );
        let persona = builtin_personas().remove(2);

        let result = service
            .analyze_ingredients("water, sugar".to_string(), persona.clone())
            .await;

        assert_eq!(result.persona_used, persona.name);
        assert!(!result.ingredients.is_empty());
        assert!(result.percentages().iter().all(|p| *p <= 100));

        // Same schema as a model backed result.
        let json = serde_json::to_value(&result).unwrap();
        let decoded: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, result);
    }

    #[tokio::test]
    async fn test_malformed_model_output_falls_back_to_mock() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Ok("I am unable to analyze this label.".to_string()) })
        });

        let service = Service::new(llm, accepting_history(), settings(ExtractionPolicy::Fallback));

        let result = service
            .analyze_food(text_input("celiac", "wheat, barley"))
            .await
            .unwrap();

        assert_eq!(result.persona_used, "Celiac & Gluten-Free");
        assert_eq!(result.personal_match, 65);
    }

    #[tokio::test]
    async fn test_slow_model_times_out_into_mock() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(model_response())
            })
        });

        let service = Service::new(llm, accepting_history(), settings(ExtractionPolicy::Fallback));

        let result = service
            .analyze_food(text_input("keto", "sugar"))
            .await
            .unwrap();

        assert_eq!(result.personal_match, 65);
        assert_eq!(result.persona_used, "Keto (Low-Carb)");
    }

    #[tokio::test]
    async fn test_missing_input_short_circuits() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        llm.expect_generate_with_image().never();
        let mut history = MockHistoryRepository::new();
        history.expect_record().never();

        let service = Service::new(llm, history, settings(ExtractionPolicy::Fallback));

        let err = service
            .analyze_food(AnalyzeFoodInput {
                profile_id: "keto".to_string(),
                ingredients: None,
                image: None,
                allergies: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::MissingInput);

        let err = service
            .analyze_food_text(AnalyzeFoodTextInput {
                profile_id: "keto".to_string(),
                ingredients: "  ".to_string(),
                allergies: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::MissingInput);
    }

    #[tokio::test]
    async fn test_extra_allergies_do_not_leak_into_catalog() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Allergies: gluten, sesame"))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(model_response()) }));

        let service = Service::new(llm, accepting_history(), settings(ExtractionPolicy::Fallback));

        let mut input = text_input("celiac", "wheat");
        input.allergies = Some("sesame".to_string());
        service.analyze_food(input).await.unwrap();

        assert_eq!(service.resolve_persona("celiac").allergies, vec!["gluten"]);
    }

    #[tokio::test]
    async fn test_image_is_extracted_before_analysis() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, data, mime| {
                prompt == LABEL_EXTRACTION_PROMPT && !data.is_empty() && mime == "image/png"
            })
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async { Ok("  Ingredients: oats, honey \n".to_string()) })
            });
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Ingredients: Ingredients: oats, honey\n"))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(model_response()) }));

        let service = Service::new(llm, accepting_history(), settings(ExtractionPolicy::Strict));

        let result = service
            .analyze_food(AnalyzeFoodInput {
                profile_id: "bodybuilder".to_string(),
                ingredients: Some("ignored when an image is present".to_string()),
                image: Some(LabelImage::new(png_bytes(), Some("image/png".to_string()))),
                allergies: None,
            })
            .await
            .unwrap();

        assert_eq!(result.persona_used, "Bodybuilder (High-Protein)");
    }

    #[tokio::test]
    async fn test_extraction_failure_with_fallback_policy() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _| {
                Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
            });

        let service = Service::new(llm, accepting_history(), settings(ExtractionPolicy::Fallback));

        let text = service
            .extract_label_text(LabelImage::new(png_bytes(), Some("image/png".to_string())))
            .await
            .unwrap();

        assert_eq!(text, FALLBACK_LABEL_TEXT);
    }

    #[tokio::test]
    async fn test_undecodable_image_with_fallback_policy_reaches_analysis() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains(FALLBACK_LABEL_TEXT))
            .times(1)
            .returning(|_, _| {
                Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
            });

        let service = Service::new(llm, accepting_history(), settings(ExtractionPolicy::Fallback));

        let result = service
            .analyze_food(AnalyzeFoodInput {
                profile_id: "migraine".to_string(),
                ingredients: None,
                image: Some(LabelImage::new(
                    b"not an image".to_vec(),
                    Some("image/jpeg".to_string()),
                )),
                allergies: None,
            })
            .await
            .unwrap();

        assert_eq!(result.persona_used, "Migraine-Sensitive");
        assert_eq!(result.ingredients_analyzed, 5);
    }

    #[tokio::test]
    async fn test_extraction_failure_with_strict_policy() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _| Box::pin(async { Ok("   ".to_string()) }));
        llm.expect_generate_with_text().never();
        let mut history = MockHistoryRepository::new();
        history.expect_record().never();

        let service = Service::new(llm, history, settings(ExtractionPolicy::Strict));

        let err = service
            .analyze_food(AnalyzeFoodInput {
                profile_id: "keto".to_string(),
                ingredients: None,
                image: Some(LabelImage::new(png_bytes(), Some("image/png".to_string()))),
                allergies: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_oversized_image_is_rejected_before_the_model() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();
        llm.expect_generate_with_text().never();
        let mut history = MockHistoryRepository::new();
        history.expect_record().never();

        let service = Service::new(llm, history, settings(ExtractionPolicy::Strict));

        let err = service
            .extract_label_text(LabelImage::new(
                png_header_only(8000, 8000),
                Some("image/png".to_string()),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExtractionFailed(msg) if msg.contains("limits")));
    }

    #[tokio::test]
    async fn test_history_tracks_every_analysis() {
        let service = Service::new(
            failing_text_model(),
            InMemoryHistoryRepository::new(10),
            settings(ExtractionPolicy::Fallback),
        );

        for _ in 0..12 {
            service
                .analyze_food(text_input("diabetic", "dextrose"))
                .await
                .unwrap();
        }

        let snapshot = service.get_recent_history().await.unwrap();

        assert_eq!(snapshot.total_scans, 10);
        assert_eq!(snapshot.recent_scans.len(), 3);
        assert!(snapshot.recent_scans.iter().all(|r| r.profile == "diabetic"));
    }

    #[tokio::test]
    async fn test_history_failure_does_not_fail_analysis() {
        let mut history = MockHistoryRepository::new();
        history
            .expect_record()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let service = Service::new(
            failing_text_model(),
            history,
            settings(ExtractionPolicy::Fallback),
        );

        assert!(service.analyze_food(text_input("keto", "sugar")).await.is_ok());
    }
}
