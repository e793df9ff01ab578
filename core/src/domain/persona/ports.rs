use crate::domain::persona::{entities::Persona, value_objects::CustomPersonaInput};

/// Lookup and synthesis of health profiles.
#[cfg_attr(test, mockall::automock)]
pub trait PersonaService: Send + Sync {
    fn list_personas(&self) -> Vec<Persona>;

    /// Falls back to the first built-in persona when `persona_id` is unknown.
    fn resolve_persona(&self, persona_id: &str) -> Persona;

    fn build_custom_persona(&self, input: CustomPersonaInput) -> Persona;
}
