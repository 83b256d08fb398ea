/*
[INPUT]:  Validated order spec and market constraints
[OUTPUT]: Trigger price normalized to the market price precision
[POS]:    Order layer - exchange-side limits (min trade size, price precision)
[UPDATE]: When market validation rules change
*/

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::http::{Result, SlError};
use crate::types::{MarketConstraints, OrderSpec};

/// Largest scale a `Decimal` can carry
pub const MAX_SCALE: u32 = 28;

/// Number of digits right of the decimal point once trailing zeros are
/// dropped: `100.50` -> 1, `0.001` -> 3, `5` -> 0.
pub fn decimal_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Round `value` to exactly `places` decimal places.
///
/// Uses banker's rounding (half to even) and pads with zeros when the value
/// has fewer places, so `quantize(10.5, 3)` is `10.500`. Fails when the
/// padded value no longer fits the 96-bit mantissa.
pub fn quantize(value: Decimal, places: u32) -> Result<Decimal> {
    let places = places.min(MAX_SCALE);
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    // rescale clamps the scale instead of failing
    rounded.rescale(places);
    if rounded.scale() != places {
        return Err(SlError::ScaleOverflow {
            price: value,
            precision: places,
        });
    }
    Ok(rounded)
}

/// Validate quantity and trigger price against the market limits.
///
/// Precision is counted on the price as given, before quantization.
pub fn check(
    market_symbol: &str,
    quantity: Decimal,
    trigger_price: Decimal,
    constraints: &MarketConstraints,
) -> Result<Decimal> {
    if quantity < constraints.min_trade_size {
        return Err(SlError::BelowMinimumSize {
            market_symbol: market_symbol.to_string(),
            quantity,
            min_trade_size: constraints.min_trade_size,
        });
    }

    let digits = decimal_digits(trigger_price);
    debug!(
        market_symbol,
        %trigger_price,
        digits,
        precision = constraints.price_precision,
        "checking trigger price precision"
    );
    if digits > constraints.price_precision {
        return Err(SlError::PrecisionExceeded {
            price: trigger_price,
            digits,
            precision: constraints.price_precision,
        });
    }

    quantize(trigger_price, constraints.price_precision)
}

/// Apply [`check`] to a whole spec. `None` means verification was skipped:
/// the spec is returned untouched, price unquantized and size unchecked.
pub fn verify(spec: OrderSpec, constraints: Option<&MarketConstraints>) -> Result<OrderSpec> {
    let Some(constraints) = constraints else {
        return Ok(spec);
    };
    let trigger_price = check(
        &spec.market_symbol,
        spec.quantity,
        spec.trigger_price,
        constraints,
    )?;
    Ok(OrderSpec {
        trigger_price,
        ..spec
    })
}
