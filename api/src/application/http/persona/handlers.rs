pub mod create_custom_profile;
pub mod get_personas;
