//! Domain value objects for card validation with type-level safety.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
