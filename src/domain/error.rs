//! Error types for card validation requests

use thiserror::Error;

/// Number of leading characters of a rejected input echoed back to the caller
pub const PREVIEW_CHARS: usize = 4;

/// Failures a validation request can end in. Both are client errors and
/// neither is retryable.
#[derive(Error, Debug)]
pub enum CardError {
    /// Request body could not be decoded into `{ "card_number": string }`
    #[error("{0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// Normalized input is not 8-19 ASCII digits
    #[error("invalid card number: {preview}")]
    InvalidFormat { preview: String },
}

impl CardError {
    /// Builds an `InvalidFormat` error that only carries the first few
    /// characters of the raw input, never the full number.
    pub fn invalid_format(raw: &str) -> Self {
        Self::InvalidFormat {
            preview: raw.chars().take(PREVIEW_CHARS).collect(),
        }
    }

    /// HTTP status code the handler answers with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest(_) | Self::InvalidFormat { .. } => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_truncates_input() {
        let error = CardError::invalid_format("4532 0151 1283 0366x");
        assert_eq!(error.to_string(), "invalid card number: 4532");
    }

    #[test]
    fn test_invalid_format_short_input_is_echoed_whole() {
        let error = CardError::invalid_format("ab");
        assert_eq!(error.to_string(), "invalid card number: ab");

        let error = CardError::invalid_format("");
        assert_eq!(error.to_string(), "invalid card number: ");
    }

    #[test]
    fn test_invalid_format_preview_is_char_aware() {
        let error = CardError::invalid_format("éééééé");
        assert_eq!(error.to_string(), "invalid card number: éééé");
    }

    #[test]
    fn test_malformed_request_uses_decoder_message() {
        let decode_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = decode_error.to_string();
        let error = CardError::from(decode_error);

        assert_eq!(error.to_string(), expected);
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CardError::invalid_format("abc").status_code(), 400);
    }
}
