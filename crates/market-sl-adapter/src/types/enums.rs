/*
[INPUT]:  Bittrex v3 API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Comparison applied between the market price and the trigger price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    #[serde(rename = "LTE")]
    Lte,
    #[serde(rename = "GTE")]
    Gte,
}

// The conditional-orders endpoint accepts lowercase directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "BUY")]
    Buy,
    #[serde(alias = "SELL")]
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    CeilingLimit,
    CeilingMarket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    GoodTilCancelled,
    ImmediateOrCancel,
    FillOrKill,
    PostOnlyGoodTilCancelled,
    BuyNow,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionalOrderStatus {
    Open,
    Completed,
    Cancelled,
    Failed,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Operand::Lte).unwrap(), "\"LTE\"");
        assert_eq!(serde_json::to_string(&Direction::Sell).unwrap(), "\"sell\"");
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"MARKET\"");
        assert_eq!(
            serde_json::to_string(&TimeInForce::ImmediateOrCancel).unwrap(),
            "\"IMMEDIATE_OR_CANCEL\""
        );
    }

    #[test]
    fn test_direction_accepts_uppercase() {
        let direction: Direction = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(direction, Direction::Sell);
    }
}
