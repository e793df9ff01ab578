use tracing::debug;

use crate::domain::{
    common::{parse_csv_list, services::Service},
    food_analysis::ports::LLMClient,
    history::ports::HistoryRepository,
    persona::{
        entities::Persona,
        ports::PersonaService,
        value_objects::{
            CUSTOM_PERSONA_EMOJI, CUSTOM_PERSONA_ID, CustomPersonaInput, DEFAULT_CUSTOM_GOAL,
            DEFAULT_CUSTOM_NAME,
        },
    },
};

/// Synthesizes a one-off persona from user supplied form values.
pub fn build_custom_persona(input: CustomPersonaInput) -> Persona {
    let name = match input.name.trim() {
        "" => DEFAULT_CUSTOM_NAME.to_string(),
        name => name.to_string(),
    };

    let goals = match input.goals.trim() {
        "" => vec![DEFAULT_CUSTOM_GOAL.to_string()],
        goals => vec![goals.to_string()],
    };

    Persona {
        id: CUSTOM_PERSONA_ID.to_string(),
        name,
        emoji: CUSTOM_PERSONA_EMOJI.to_string(),
        goals,
        avoid: Vec::new(),
        allergies: parse_csv_list(&input.allergies),
    }
}

impl<LLM, H> PersonaService for Service<LLM, H>
where
    LLM: LLMClient,
    H: HistoryRepository,
{
    fn list_personas(&self) -> Vec<Persona> {
        self.personas.to_vec()
    }

    fn resolve_persona(&self, persona_id: &str) -> Persona {
        if let Some(persona) = self.personas.iter().find(|p| p.id == persona_id) {
            return persona.clone();
        }

        debug!(persona_id, "unknown persona, using the default profile");

        self.personas
            .first()
            .cloned()
            .unwrap_or_else(|| build_custom_persona(CustomPersonaInput::default()))
    }

    fn build_custom_persona(&self, input: CustomPersonaInput) -> Persona {
        build_custom_persona(input)
    }
}
