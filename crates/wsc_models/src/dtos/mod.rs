mod error;
mod template;
mod user;
mod workspace;

pub use error::*;
pub use template::*;
pub use user::*;
pub use workspace::*;
