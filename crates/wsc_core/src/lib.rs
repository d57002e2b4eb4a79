pub mod actions;
pub mod duplication;
pub mod form;
pub mod logs;
pub mod variables;
