use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::food_analysis::value_objects::ExtractionPolicy;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriMatchConfig {
    pub llm: LLMConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` keeps the service on the mock analysis.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_vision_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub extraction_policy: ExtractionPolicy,
    pub history_capacity: usize,
    pub recent_limit: usize,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-pro".to_string(),
            gemini_vision_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            extraction_policy: ExtractionPolicy::Fallback,
            history_capacity: 10,
            recent_limit: 3,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

/// Splits a comma separated list, trimming each entry and dropping empty ones.
pub fn parse_csv_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
