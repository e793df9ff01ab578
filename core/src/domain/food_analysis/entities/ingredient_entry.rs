use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientEntry {
    pub name: String,
    pub bucket: Bucket,
    pub impact: String,
    /// 0-100
    pub confidence: u8,
    pub explanation: String,
}

/// Three-way classification of an ingredient against a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Fuel,
    Filler,
    Risk,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Fuel => "fuel",
            Bucket::Filler => "filler",
            Bucket::Risk => "risk",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fuel" => Ok(Bucket::Fuel),
            "filler" => Ok(Bucket::Filler),
            "risk" => Ok(Bucket::Risk),
            other => Err(CoreError::Invalid(format!("unknown ingredient bucket `{other}`"))),
        }
    }
}

// Models are not consistent about letter case, anything else is rejected.
impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
