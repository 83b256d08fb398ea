/*
[INPUT]:  Bittrex v3 API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::enums::{ConditionalOrderStatus, Operand};
use super::models::MarketConstraints;
use crate::http::{Result, SlError};

/// Response of `GET /v3/markets/{marketSymbol}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    pub symbol: String,
    #[serde(default)]
    pub base_currency_symbol: String,
    #[serde(default)]
    pub quote_currency_symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_trade_size: Decimal,
    pub precision: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl MarketInfo {
    /// Extract the limits used to validate an order on this market
    pub fn constraints(&self) -> Result<MarketConstraints> {
        if self.min_trade_size <= Decimal::ZERO {
            return Err(SlError::InvalidResponse(format!(
                "market {} reports non-positive minTradeSize {}",
                self.symbol, self.min_trade_size
            )));
        }
        Ok(MarketConstraints {
            min_trade_size: self.min_trade_size,
            price_precision: self.precision,
        })
    }
}

/// Response of `POST /v3/conditional-orders`.
///
/// The order exists once the exchange answers 2xx, so no field is required
/// and the body is kept as received in `raw`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand: Option<Operand>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConditionalOrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_creation_error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip)]
    pub raw: String,
}

impl ConditionalOrder {
    /// Decode a success body. Never fails: fields of an unexpected shape are
    /// left empty and the body itself is always kept.
    pub fn from_body(body: &str) -> Self {
        let mut order = match serde_json::from_str::<Self>(body) {
            Ok(order) => order,
            Err(err) => {
                warn!(%err, "conditional order response has an unexpected shape");
                Self::default()
            }
        };
        order.raw = body.to_string();
        order
    }

    /// The exchange confirmation exactly as received
    pub fn confirmation(&self) -> &str {
        self.raw.trim()
    }
}
