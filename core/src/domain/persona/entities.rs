use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::parse_csv_list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Persona {
    #[schema(example = "keto")]
    pub id: String,
    #[schema(example = "Keto (Low-Carb)")]
    pub name: String,
    pub emoji: String,
    pub goals: Vec<String>,
    pub avoid: Vec<String>,
    pub allergies: Vec<String>,
}

impl Persona {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
        goals: &[&str],
        avoid: &[&str],
        allergies: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            goals: goals.iter().map(|g| g.to_string()).collect(),
            avoid: avoid.iter().map(|a| a.to_string()).collect(),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Returns a copy of this persona carrying the extra comma separated
    /// allergies. Entries already present are not repeated.
    pub fn with_extra_allergies(&self, allergies_csv: &str) -> Persona {
        let mut persona = self.clone();
        for allergy in parse_csv_list(allergies_csv) {
            if !persona
                .allergies
                .iter()
                .any(|known| known.eq_ignore_ascii_case(&allergy))
            {
                persona.allergies.push(allergy);
            }
        }
        persona
    }
}
