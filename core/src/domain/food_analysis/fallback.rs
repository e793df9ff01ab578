use crate::domain::{
    food_analysis::{
        entities::{AnalysisResult, Bucket, IngredientEntry},
        helpers::count_ingredient_tokens,
    },
    persona::entities::Persona,
};

/// Fixed analysis returned whenever the model cannot be used.
///
/// Free text mentions the persona so the answer stays personalized, and the
/// shape is identical to a model backed result.
pub fn mock_analysis(persona: &Persona, ingredients: &str) -> AnalysisResult {
    let name = &persona.name;

    let entries = vec![
        IngredientEntry {
            name: "Whole Grain Oats".to_string(),
            bucket: Bucket::Fuel,
            impact: "Good fiber source for sustained energy".to_string(),
            confidence: 95,
            explanation: format!(
                "Excellent for {name} - provides slow-release energy without spikes"
            ),
        },
        IngredientEntry {
            name: "Maltodextrin".to_string(),
            bucket: Bucket::Risk,
            impact: "Causes rapid blood sugar spike".to_string(),
            confidence: 88,
            explanation: format!("High glycemic index (85+). Avoid for {name} profile."),
        },
        IngredientEntry {
            name: "Natural Flavors".to_string(),
            bucket: Bucket::Filler,
            impact: "Vague term with unknown composition".to_string(),
            confidence: 70,
            explanation: format!("May contain solvents or additives. {name} should be cautious."),
        },
    ];

    let analyzed = match count_ingredient_tokens(ingredients) {
        0 => entries.len(),
        count => count,
    };

    AnalysisResult {
        personal_match: 65,
        quality_score: 82,
        fuel_percent: 45,
        filler_percent: 35,
        risk_percent: 20,
        conflicts: vec![
            format!("Maltodextrin: High glycemic index (conflicts with {name})"),
            "Added sugars: Empty calories".to_string(),
        ],
        deceptions: vec![
            "'Natural Flavors': Vague term, may contain hidden additives".to_string(),
            "'Spices': Unspecified blend".to_string(),
        ],
        ingredients: entries,
        persona_used: name.clone(),
        ingredients_analyzed: analyzed as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_analysis_is_persona_flavored() {
        let persona = Persona::new("celiac", "Celiac & Gluten-Free", "🍞", &[], &[], &[]);

        let result = mock_analysis(&persona, "water, sugar");

        assert_eq!(result.persona_used, "Celiac & Gluten-Free");
        assert_eq!(result.ingredients_analyzed, 2);
        assert!(result.conflicts[0].contains("Celiac & Gluten-Free"));
        assert!(
            result
                .ingredients
                .iter()
                .all(|entry| entry.explanation.contains("Celiac & Gluten-Free"))
        );
        assert!(result.percentages().iter().all(|p| *p <= 100));
    }

    #[test]
    fn test_mock_analysis_counts_at_least_one_ingredient() {
        let persona = Persona::new("keto", "Keto (Low-Carb)", "⚖️", &[], &[], &[]);

        assert_eq!(mock_analysis(&persona, "").ingredients_analyzed, 3);
    }
}
