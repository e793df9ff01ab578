use std::{fmt, str::FromStr};

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Fixed ingredient list used when label text cannot be extracted and the
/// extraction policy allows degrading.
pub const FALLBACK_LABEL_TEXT: &str =
    "water, sugar, citric acid, natural flavors, sodium benzoate";

/// What to do when a label image cannot be turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionPolicy {
    /// Continue with [`FALLBACK_LABEL_TEXT`].
    #[default]
    Fallback,
    /// Reject the request with [`CoreError::ExtractionFailed`].
    Strict,
}

impl FromStr for ExtractionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(ExtractionPolicy::Fallback),
            "strict" => Ok(ExtractionPolicy::Strict),
            other => Err(CoreError::Invalid(format!(
                "unknown extraction policy `{other}`, expected `fallback` or `strict`"
            ))),
        }
    }
}

impl fmt::Display for ExtractionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionPolicy::Fallback => f.write_str("fallback"),
            ExtractionPolicy::Strict => f.write_str("strict"),
        }
    }
}

/// An uploaded label picture as received from the client.
#[derive(Debug, Clone)]
pub struct LabelImage {
    pub data: Bytes,
    pub content_type: Option<String>,
}

impl LabelImage {
    pub fn new(data: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            data: data.into(),
            content_type,
        }
    }

    /// Whether the client declared this upload as an image.
    pub fn is_declared_image(&self) -> bool {
        !self.data.is_empty()
            && self
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub profile_id: String,
    pub ingredients: Option<String>,
    pub image: Option<LabelImage>,
    pub allergies: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeFoodTextInput {
    pub profile_id: String,
    pub ingredients: String,
    pub allergies: Option<String>,
}

impl From<AnalyzeFoodTextInput> for AnalyzeFoodInput {
    fn from(input: AnalyzeFoodTextInput) -> Self {
        Self {
            profile_id: input.profile_id,
            ingredients: Some(input.ingredients),
            image: None,
            allergies: input.allergies,
        }
    }
}

/// Where the ingredient text of a request comes from.
#[derive(Debug, Clone, Copy)]
pub enum IngredientSource<'a> {
    Image(&'a LabelImage),
    Text(&'a str),
}

impl<'a> IngredientSource<'a> {
    /// Image wins over text when both are usable.
    pub fn select(
        ingredients: Option<&'a str>,
        image: Option<&'a LabelImage>,
    ) -> Result<Self, CoreError> {
        if let Some(image) = image
            && image.is_declared_image()
        {
            return Ok(IngredientSource::Image(image));
        }

        match ingredients {
            Some(text) if !text.trim().is_empty() => Ok(IngredientSource::Text(text)),
            _ => Err(CoreError::MissingInput),
        }
    }
}
