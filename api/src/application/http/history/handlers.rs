pub mod get_history;
