pub mod food_analysis;
pub mod health;
pub mod history;
pub mod persona;
pub mod server;
