use serde_json::json;

/// Returns the JSON schema for food label analysis LLM responses
pub fn get_analysis_schema() -> serde_json::Value {
    let score = json!({ "type": "integer" });

    json!({
        "type": "object",
        "properties": {
            "personal_match": score,
            "quality_score": score,
            "fuel_percent": score,
            "filler_percent": score,
            "risk_percent": score,
            "conflicts": {
                "type": "array",
                "items": { "type": "string" }
            },
            "deceptions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "bucket": {
                            "type": "string",
                            "enum": ["fuel", "filler", "risk"]
                        },
                        "impact": { "type": "string" },
                        "confidence": score,
                        "explanation": { "type": "string" }
                    },
                    "required": ["name", "bucket", "impact", "confidence", "explanation"]
                }
            }
        },
        "required": [
            "personal_match", "quality_score", "fuel_percent", "filler_percent",
            "risk_percent", "conflicts", "deceptions", "ingredients"
        ]
    })
}
