pub mod analyze_food;
pub mod analyze_food_text;
pub mod get_available_models;
