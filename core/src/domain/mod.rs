pub mod common;
pub mod food_analysis;
pub mod history;
pub mod persona;
