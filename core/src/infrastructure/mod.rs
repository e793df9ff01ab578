pub mod history;
pub mod llm;
