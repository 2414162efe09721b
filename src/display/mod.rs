//! Display module for formatting validation results as function URL responses.
pub mod function_url;
pub use function_url::*;
