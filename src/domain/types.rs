//! Type-safe domain models for card validation.
//!
//! This module contains value objects that enforce invariants at construction:
//! - Card numbers are wrapped in a semantic newtype
//! - Normalization and validation happen in the only constructor
//! - A `DigitString` that exists is always 8-19 ASCII digits

use crate::domain::CardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest accepted card number after normalization
pub const MIN_CARD_LENGTH: usize = 8;
/// Longest accepted card number after normalization
pub const MAX_CARD_LENGTH: usize = 19;

/// Normalized card number: 8 to 19 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Strips spaces and hyphens from `raw` and validates what is left.
    /// Accepts formats: 4532015112830366, 4532 0151 1283 0366, 4532-0151-1283-0366
    pub fn normalize(raw: &str) -> Result<Self, CardError> {
        let normalized: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();

        let length = normalized.chars().count();
        if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&length) {
            return Err(CardError::invalid_format(raw));
        }

        if !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardError::invalid_format(raw));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of each digit, left to right
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u32> + ExactSizeIterator + '_ {
        self.0.bytes().map(|b| u32::from(b - b'0'))
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issuing network label (e.g., "Visa", "Switch | Maestro").
/// Multi-network labels are kept verbatim and never split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NetworkName(&'static str);

impl NetworkName {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of validating one card number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the Luhn checksum holds
    pub valid: bool,
    /// Likely issuing network, `None` when no prefix rule matched
    pub network: Option<NetworkName>,
}

impl ValidationResult {
    pub fn new(valid: bool, network: Option<NetworkName>) -> Self {
        Self { valid, network }
    }
}

/// Incoming request body. A missing `card_number` decodes as empty and is
/// then rejected by normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardNumberRequest {
    #[serde(default)]
    pub card_number: String,
}

/// Successful response body; echoes the raw, un-normalized card number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardNumberResponse {
    #[serde(flatten)]
    pub request: CardNumberRequest,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkName>,
}

impl CardNumberResponse {
    pub fn new(request: CardNumberRequest, result: ValidationResult) -> Self {
        Self {
            request,
            valid: result.valid,
            network: result.network,
        }
    }
}
