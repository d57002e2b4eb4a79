mod actions;
pub mod cli;
pub mod command;
mod config;
mod fs;
mod variables;

pub use cli::*;
pub use command::*;
