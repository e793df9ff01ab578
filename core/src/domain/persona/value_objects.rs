pub const CUSTOM_PERSONA_ID: &str = "custom";
pub const CUSTOM_PERSONA_EMOJI: &str = "🎯";
pub const DEFAULT_CUSTOM_NAME: &str = "Custom Profile";
pub const DEFAULT_CUSTOM_GOAL: &str = "Personal health goals";

#[derive(Debug, Clone, Default)]
pub struct CustomPersonaInput {
    pub name: String,
    pub goals: String,
    pub allergies: String,
}
