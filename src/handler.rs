//! Request handling: decode, validate, respond.

use crate::data::CardValidator;
use crate::display::{FunctionUrlResponse, ResponseFormatter};
use crate::domain::{CardError, CardNumberRequest, PREVIEW_CHARS};

/// Turns raw request bodies into responses
#[derive(Debug, Clone, Copy, Default)]
pub struct CardCheckHandler {
    validator: CardValidator,
    formatter: ResponseFormatter,
}

impl CardCheckHandler {
    pub fn new() -> Self {
        Self {
            validator: CardValidator::new(),
            formatter: ResponseFormatter::new(),
        }
    }

    /// Handles one request body. Failures become 400 responses, never errors.
    pub fn handle(&self, body: &str) -> FunctionUrlResponse {
        tracing::debug!(body_len = body.len(), "Received request");

        self.process(body).unwrap_or_else(|error| {
            tracing::warn!(%error, "Rejected request");
            ResponseFormatter::create_error_output(&error)
        })
    }

    fn process(&self, body: &str) -> Result<FunctionUrlResponse, CardError> {
        let request: CardNumberRequest = serde_json::from_str(body)?;

        let result = self.validator.validate(&request.card_number)?;
        tracing::info!(
            prefix = %request.card_number.chars().take(PREVIEW_CHARS).collect::<String>(),
            valid = result.valid,
            network = result.network.map(|n| n.as_str()).unwrap_or_default(),
            "Validated card number"
        );

        self.formatter.format(request, result)
    }
}
