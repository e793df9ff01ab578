use serde::{Deserialize, Deserializer};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::{AnalysisResult, Bucket, IngredientEntry},
    persona::entities::Persona,
};

/// Returns the first balanced `{ ... }` region of `text`.
///
/// Braces inside JSON string literals are ignored. An unterminated region
/// yields `None`.
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[derive(Debug, Deserialize)]
struct ModelAnalysis {
    #[serde(deserialize_with = "deserialize_score")]
    personal_match: u8,
    #[serde(deserialize_with = "deserialize_score")]
    quality_score: u8,
    #[serde(deserialize_with = "deserialize_score")]
    fuel_percent: u8,
    #[serde(deserialize_with = "deserialize_score")]
    filler_percent: u8,
    #[serde(deserialize_with = "deserialize_score")]
    risk_percent: u8,
    #[serde(default)]
    conflicts: Vec<String>,
    #[serde(default)]
    deceptions: Vec<String>,
    ingredients: Vec<ModelIngredient>,
}

#[derive(Debug, Deserialize)]
struct ModelIngredient {
    name: String,
    bucket: Bucket,
    #[serde(default)]
    impact: String,
    #[serde(deserialize_with = "deserialize_score")]
    confidence: u8,
    #[serde(default)]
    explanation: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

/// Accepts integers, floats and numeric strings such as `"45%"`, clamped to 0-100.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawScore::deserialize(deserializer)? {
        RawScore::Number(value) => value,
        RawScore::Text(text) => text
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("`{text}` is not a score")))?,
    };

    Ok(value.round().clamp(0.0, 100.0) as u8)
}

/// Decodes the raw model output into an [`AnalysisResult`] stamped for `persona`.
pub fn parse_analysis_response(raw: &str, persona: &Persona) -> Result<AnalysisResult, CoreError> {
    let json = extract_first_json_object(raw).ok_or_else(|| {
        CoreError::AnalysisDegraded("no JSON object found in model response".to_string())
    })?;

    let parsed: ModelAnalysis = serde_json::from_str(json).map_err(|e| {
        CoreError::AnalysisDegraded(format!("invalid analysis format: {}", e))
    })?;

    if parsed.ingredients.is_empty() {
        return Err(CoreError::AnalysisDegraded(
            "model returned no ingredients".to_string(),
        ));
    }

    let ingredients: Vec<IngredientEntry> = parsed
        .ingredients
        .into_iter()
        .map(|ingredient| IngredientEntry {
            name: ingredient.name,
            bucket: ingredient.bucket,
            impact: ingredient.impact,
            confidence: ingredient.confidence,
            explanation: ingredient.explanation,
        })
        .collect();

    Ok(AnalysisResult {
        personal_match: parsed.personal_match,
        quality_score: parsed.quality_score,
        fuel_percent: parsed.fuel_percent,
        filler_percent: parsed.filler_percent,
        risk_percent: parsed.risk_percent,
        conflicts: parsed.conflicts,
        deceptions: parsed.deceptions,
        ingredients_analyzed: ingredients.len() as u32,
        ingredients,
        persona_used: persona.name.clone(),
    })
}

/// Number of comma or newline separated entries in an ingredient list.
pub fn count_ingredient_tokens(ingredients: &str) -> usize {
    ingredients
        .split([',', '\n', ';'])
        .filter(|token| !token.trim().is_empty())
        .count()
}
