pub mod docs;
pub mod error;
pub mod outcome;

pub use docs::{ModuleDoc, OptionDoc, ReturnDoc};
pub use error::{ConformError, Result};
pub use outcome::Outcome;
