use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Provide an image or ingredient text")]
    MissingInput,

    #[error("Failed to extract text from image: {0}")]
    ExtractionFailed(String),

    #[error("Analysis degraded: {0}")]
    AnalysisDegraded(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Timed out waiting for {0}")]
    Timeout(String),

    #[error("Invalid value: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
