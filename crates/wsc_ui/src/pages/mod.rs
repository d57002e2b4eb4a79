pub mod not_found;
pub mod preview;
pub mod template_variables;
pub mod workspace;
