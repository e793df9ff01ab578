use std::time::Duration;

use clap::Parser;
use nutrimatch_core::domain::{
    common::{AnalysisConfig, LLMConfig, NutriMatchConfig},
    food_analysis::value_objects::ExtractionPolicy,
};

#[derive(Debug, Clone, Parser, Default)]
#[command(name = "nutrimatch-api", version, about = "Personalized food label analyzer")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// `*` allows any origin.
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            root_path: String::new(),
            allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-pro")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-vision-model",
        env = "GEMINI_VISION_MODEL",
        default_value = "gemini-1.5-flash"
    )]
    pub gemini_vision_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    /// Upper bound for every call to the model, in seconds.
    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Default for LlmArgs {
    fn default() -> Self {
        let llm = LLMConfig::default();

        Self {
            gemini_api_key: None,
            gemini_model: llm.gemini_model,
            gemini_vision_model: llm.gemini_vision_model,
            gemini_base_url: llm.gemini_base_url,
            timeout_secs: llm.request_timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalysisArgs {
    /// `fallback` keeps going with a sample ingredient list when a label
    /// image cannot be read, `strict` rejects the request.
    #[arg(long = "extraction-policy", env = "EXTRACTION_POLICY", default_value = "fallback")]
    pub extraction_policy: ExtractionPolicy,

    #[arg(long = "history-capacity", env = "HISTORY_CAPACITY", default_value_t = 10)]
    pub history_capacity: usize,

    #[arg(long = "history-recent", env = "HISTORY_RECENT", default_value_t = 3)]
    pub history_recent: usize,
}

impl Default for AnalysisArgs {
    fn default() -> Self {
        let analysis = AnalysisConfig::default();

        Self {
            extraction_policy: analysis.extraction_policy,
            history_capacity: analysis.history_capacity,
            history_recent: analysis.recent_limit,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl From<Args> for NutriMatchConfig {
    fn from(args: Args) -> Self {
        NutriMatchConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_vision_model: args.llm.gemini_vision_model,
                gemini_base_url: args.llm.gemini_base_url,
                request_timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            analysis: AnalysisConfig {
                extraction_policy: args.analysis.extraction_policy,
                history_capacity: args.analysis.history_capacity,
                recent_limit: args.analysis.history_recent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "nutrimatch-api",
            "--gemini-api-key",
            "secret",
            "--extraction-policy",
            "strict",
            "--server-allowed-origins",
            "http://localhost:3000,https://nutrimatch.app",
            "--llm-timeout-secs",
            "5",
        ]);

        assert_eq!(args.analysis.extraction_policy, ExtractionPolicy::Strict);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = NutriMatchConfig::from(args);
        assert_eq!(config.llm.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.llm.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_unknown_extraction_policy() {
        let result = Args::try_parse_from(["nutrimatch-api", "--extraction-policy", "silent"]);

        assert!(result.is_err());
    }
}
