//! Function URL response formatting for validation results.

use crate::domain::{CardError, CardNumberRequest, CardNumberResponse, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const CONTENT_TYPE: &str = "content-type";
const JSON: &str = "application/json";
const PLAIN_TEXT: &str = "text/plain";

/// Function URL response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FunctionUrlResponse {
    fn new(status_code: u16, content_type: &str, body: String) -> Self {
        Self {
            status_code,
            headers: BTreeMap::from([(CONTENT_TYPE.to_string(), content_type.to_string())]),
            body,
        }
    }
}

/// Formats validation results as function URL responses
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Creates a new ResponseFormatter instance
    pub fn new() -> Self {
        Self
    }

    /// 200 response whose JSON body echoes the raw request alongside the result
    pub fn format(
        &self,
        request: CardNumberRequest,
        result: ValidationResult,
    ) -> Result<FunctionUrlResponse, CardError> {
        // Encoding failures surface as a 400 like decoding failures do
        let body = serde_json::to_string(&CardNumberResponse::new(request, result))?;
        Ok(FunctionUrlResponse::new(200, JSON, body))
    }

    /// Plain-text error response carrying the error message
    pub fn create_error_output(error: &CardError) -> FunctionUrlResponse {
        FunctionUrlResponse::new(error.status_code(), PLAIN_TEXT, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NetworkName;

    #[test]
    fn test_success_output() {
        let request = CardNumberRequest {
            card_number: "4532 0151 1283 0366".to_string(),
        };
        let result = ValidationResult::new(true, Some(NetworkName::new("Visa")));
        let output = ResponseFormatter::new().format(request, result).unwrap();

        assert_eq!(output.status_code, 200);
        assert_eq!(output.headers[CONTENT_TYPE], JSON);
        assert_eq!(
            output.body,
            r#"{"card_number":"4532 0151 1283 0366","valid":true,"network":"Visa"}"#
        );
    }

    #[test]
    fn test_error_output() {
        let output = ResponseFormatter::create_error_output(&CardError::invalid_format("abc"));

        assert_eq!(output.status_code, 400);
        assert_eq!(output.headers[CONTENT_TYPE], PLAIN_TEXT);
        assert_eq!(output.body, "invalid card number: abc");
    }

    #[test]
    fn test_envelope_serialization() {
        let output = ResponseFormatter::create_error_output(&CardError::invalid_format("12"));
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["headers"]["content-type"], "text/plain");
        assert_eq!(json["body"], "invalid card number: 12");
    }
}
