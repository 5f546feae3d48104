pub mod dispatch;
pub mod error;
pub mod io;
pub mod paths;
pub mod prompt;
pub mod scaffold;
pub mod template;

pub use error::{Result, ScaffoldError};
