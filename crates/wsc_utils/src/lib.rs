pub mod term;
pub mod variables;
