pub mod analysis_result;
pub mod ingredient_entry;

pub use analysis_result::*;
pub use ingredient_entry::*;
