/*
[INPUT]:  Validated CLI input and market metadata
[OUTPUT]: Domain models shared by validation, building and signing
[POS]:    Data layer - core domain types
[UPDATE]: When order or market model fields change
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::http::{Result, SlError};

/// A stop-loss order as requested by the user.
///
/// Quantity and trigger price are exact decimals and strictly positive once
/// they have gone through [`crate::order::parse_positive_decimal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub market_symbol: String,
    pub quantity: Decimal,
    pub trigger_price: Decimal,
}

impl OrderSpec {
    /// Validate raw CLI strings into an order spec
    pub fn parse(market_symbol: &str, size: &str, price: &str) -> Result<Self> {
        let market_symbol = validate_market_symbol(market_symbol)?;
        let quantity = crate::order::parse_positive_decimal("order size", size)?;
        let trigger_price = crate::order::parse_positive_decimal("trigger price", price)?;
        Ok(Self {
            market_symbol,
            quantity,
            trigger_price,
        })
    }
}

/// Trading limits of one market, read from `GET /v3/markets/{symbol}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketConstraints {
    pub min_trade_size: Decimal,
    /// Maximum number of decimal places accepted for prices
    pub price_precision: u32,
}

/// Flags set once from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub dry_run: bool,
    pub skip_verification: bool,
    pub verbose: bool,
}

/// API key pair with trade privileges
#[derive(Clone)]
pub struct ApiCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Market symbols end up in a URL path and in the hashed request body, so
/// keep them to a single segment of printable ASCII.
pub fn validate_market_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim();
    if symbol.is_empty() || symbol.contains(|c: char| !c.is_ascii_graphic() || c == '/') {
        return Err(SlError::InvalidMarketSymbol(raw.to_string()));
    }
    Ok(symbol.to_string())
}
