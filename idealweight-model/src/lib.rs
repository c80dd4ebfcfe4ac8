pub mod error;
pub mod features;
pub mod prediction;
pub mod profile;
pub mod range;
pub mod recommendation;

pub use error::{Error, Result};
