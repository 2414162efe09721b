//! Card number validation: normalization, checksum and network lookup.

use crate::data::{luhn, networks::NetworkClassifier};
use crate::domain::{CardError, DigitString, ValidationResult};

/// Validates raw card numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidator {
    classifier: NetworkClassifier,
}

impl CardValidator {
    /// Creates a validator using the built-in network table
    pub fn new() -> Self {
        Self {
            classifier: NetworkClassifier::new(),
        }
    }

    /// Normalizes `raw` and validates it
    pub fn validate(&self, raw: &str) -> Result<ValidationResult, CardError> {
        let digits = DigitString::normalize(raw)?;
        Ok(self.check(&digits))
    }

    /// Checksum and network for an already normalized number
    pub fn check(&self, digits: &DigitString) -> ValidationResult {
        ValidationResult::new(luhn::is_valid_luhn(digits), self.classifier.classify(digits))
    }
}
