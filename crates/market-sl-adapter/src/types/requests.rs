/*
[INPUT]:  Bittrex v3 API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Direction, Operand, OrderType, TimeInForce};

/// Body of `POST /v3/conditional-orders`.
///
/// Field order is the wire order: the content hash is computed over the
/// serialized text, so the struct must serialize the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalOrderRequest {
    pub operand: Operand,
    pub market_symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub trigger_price: Decimal,
    pub order_to_create: NewOrderRequest,
}

/// Order placed by the exchange once the trigger fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub direction: Direction,
    pub market_symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
}
