/*
[INPUT]:  Market symbol, trigger price, quantity
[OUTPUT]: Conditional-order request body
[POS]:    Order layer - payload assembly
[UPDATE]: When the conditional-order wire format changes
*/

use rust_decimal::Decimal;

use crate::types::{
    ConditionalOrderRequest, Direction, NewOrderRequest, Operand, OrderSpec, OrderType,
    TimeInForce,
};

/// Stop-loss: once the price falls to `trigger_price` or below, sell
/// `quantity` at market, immediate-or-cancel.
pub fn build(market_symbol: &str, trigger_price: Decimal, quantity: Decimal) -> ConditionalOrderRequest {
    ConditionalOrderRequest {
        operand: Operand::Lte,
        market_symbol: market_symbol.to_string(),
        trigger_price,
        order_to_create: NewOrderRequest {
            direction: Direction::Sell,
            market_symbol: market_symbol.to_string(),
            order_type: OrderType::Market,
            time_in_force: TimeInForce::ImmediateOrCancel,
            quantity,
        },
    }
}

pub fn build_from_spec(spec: &OrderSpec) -> ConditionalOrderRequest {
    build(&spec.market_symbol, spec.trigger_price, spec.quantity)
}
