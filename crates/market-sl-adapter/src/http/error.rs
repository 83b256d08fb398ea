/*
[INPUT]:  Error sources (input validation, market constraints, signing, HTTP, serialization)
[OUTPUT]: Structured error types naming the offending value and constraint
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the stop-loss adapter
#[derive(Error, Debug)]
pub enum SlError {
    /// Input is not a decimal number
    #[error("Specified {field} {value} is not a valid number")]
    Parse { field: &'static str, value: String },

    /// Input parsed but is zero or negative
    #[error("Specified {field} {value} is not a positive number")]
    NonPositive { field: &'static str, value: Decimal },

    /// Order quantity below the market minimum
    #[error(
        "Order size {quantity} is below required minimum order size value of {min_trade_size} for market {market_symbol}"
    )]
    BelowMinimumSize {
        market_symbol: String,
        quantity: Decimal,
        min_trade_size: Decimal,
    },

    /// Trigger price has more decimal places than the market allows
    #[error("Price {price} has precision which exceeds {precision} decimal places ({digits} given)")]
    PrecisionExceeded {
        price: Decimal,
        digits: u32,
        precision: u32,
    },

    /// Quantized price does not fit a `Decimal` at the market precision
    #[error("Price {price} cannot be represented with {precision} decimal places")]
    ScaleOverflow { price: Decimal, precision: u32 },

    /// Market symbol cannot be used in a request path
    #[error("Invalid market symbol {0:?}: expected ASCII BASE-QUOTE without whitespace or '/'")]
    InvalidMarketSymbol(String),

    /// Text cannot be encoded as Latin-1 for signing
    #[error("{field} contains character {character:?} outside the Latin-1 range")]
    Encoding { field: &'static str, character: char },

    /// Exchange answered with a non-success status
    #[error("[{status}] {body}")]
    Http { status: u16, body: String },

    /// Transport-level request failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SlError {
    /// Check if the error was raised before anything touched the network
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            SlError::Parse { .. }
                | SlError::NonPositive { .. }
                | SlError::BelowMinimumSize { .. }
                | SlError::PrecisionExceeded { .. }
                | SlError::ScaleOverflow { .. }
                | SlError::InvalidMarketSymbol(_)
        )
    }

    /// HTTP status code reported by the exchange, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SlError::Http { status, .. } => Some(*status),
            SlError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Create an HTTP error from status code and verbatim response body
    pub fn http_error(status: StatusCode, body: impl Into<String>) -> Self {
        SlError::Http {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for stop-loss operations
pub type Result<T> = std::result::Result<T, SlError>;
