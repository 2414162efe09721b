//! Payment card number validation with domain-driven design and type safety.
//! Checks the Luhn checksum, identifies the issuing network and prints a
//! function URL style JSON response.

mod data;
mod display;
mod domain;
mod handler;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use handler::CardCheckHandler;
use std::io::Read;

/// Validate a payment card number
#[derive(Debug, Parser)]
#[command(name = "card-check", version)]
struct Cli {
    /// Request body, e.g. '{"card_number": "4532 0151 1283 0366"}'. Read from stdin when omitted.
    body: Option<String>,

    /// Print only the response body instead of the full response envelope
    #[arg(long)]
    body_only: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let body = match cli.body {
        Some(body) => body,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request body from stdin")?;
            body
        }
    };

    let response = CardCheckHandler::new().handle(&body);

    if cli.body_only {
        println!("{}", response.body);
    } else {
        println!(
            "{}",
            serde_json::to_string(&response).context("Failed to encode response")?
        );
    }

    Ok(())
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["card-check", "--body-only", "--debug", "{}"]).unwrap();

        assert!(cli.body_only);
        assert!(cli.debug);
        assert_eq!(cli.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_cli_body_is_optional() {
        let cli = Cli::try_parse_from(["card-check"]).unwrap();
        assert!(cli.body.is_none());
        assert!(!cli.body_only);
    }

    #[test]
    fn test_response_envelope_serialization() {
        let response = CardCheckHandler::new().handle(r#"{"card_number": "abc"}"#);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains(r#""statusCode":400"#));
        assert!(json.contains("invalid card number: abc"));
    }
}
