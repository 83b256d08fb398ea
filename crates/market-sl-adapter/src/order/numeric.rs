/*
[INPUT]:  User-supplied numeric strings
[OUTPUT]: Exact positive decimals
[POS]:    Order layer - input validation
[UPDATE]: When accepted number formats change
*/

use rust_decimal::Decimal;

use crate::http::{Result, SlError};

/// Parse `raw` as an exact, strictly positive decimal.
///
/// Plain and scientific notation are accepted. Values that would need
/// rounding to fit a `Decimal` are rejected rather than silently changed.
pub fn parse_positive_decimal(field: &'static str, raw: &str) -> Result<Decimal> {
    let value = parse_exact(raw.trim()).ok_or_else(|| SlError::Parse {
        field,
        value: raw.to_string(),
    })?;

    if value <= Decimal::ZERO {
        return Err(SlError::NonPositive { field, value });
    }
    Ok(value)
}

fn parse_exact(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str_exact(text).ok()
    }
}
