use crate::domain::persona::entities::Persona;

pub const LABEL_EXTRACTION_PROMPT: &str = "Extract all text from this food label, especially the \
ingredient list. Just return the text you see.";

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

/// Builds the instruction sent to the text model for one ingredient list.
pub fn build_analysis_prompt(ingredients: &str, persona: &Persona) -> String {
    format!(
        r#"You are a nutrition analyst. Analyze these food label ingredients for the "{name}" health profile.

Ingredients: {ingredients}

User profile:
- Name: {name}
- Goals: {goals}
- Avoid: {avoid}
- Allergies: {allergies}

Instructions:
1. Classify every ingredient into exactly one bucket: "fuel" (beneficial for this profile), "filler" (neutral, little value) or "risk" (harmful or conflicting with the profile).
2. For each ingredient give a short impact statement, a confidence between 0 and 100 and a one or two sentence explanation written for this profile.
3. Compute fuel_percent, filler_percent and risk_percent (integers 0-100) describing the share of each bucket.
4. Give personal_match (0-100, how well the product fits this profile) and quality_score (0-100, overall ingredient quality).
5. List conflicts: ingredients that hit the avoid list or the allergies of the profile, with the reason.
6. List deceptions: vague or misleading labeling terms such as "natural flavors" or "spices" that may hide the real composition.

Return a single JSON object and nothing else, with exactly these fields:
{{"personal_match": int, "quality_score": int, "fuel_percent": int, "filler_percent": int, "risk_percent": int, "conflicts": [string], "deceptions": [string], "ingredients": [{{"name": string, "bucket": "fuel" | "filler" | "risk", "impact": string, "confidence": int, "explanation": string}}]}}"#,
        name = persona.name,
        ingredients = ingredients.trim(),
        goals = join_or_none(&persona.goals),
        avoid = join_or_none(&persona.avoid),
        allergies = join_or_none(&persona.allergies),
    )
}
