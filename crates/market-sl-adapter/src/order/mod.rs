/*
[INPUT]:  Raw order parameters and market constraints
[OUTPUT]: Validated decimals, normalized trigger price, conditional-order payload
[POS]:    Order layer - validation and request building before signing
[UPDATE]: When validation rules or payload shape change
*/

pub mod builder;
pub mod constraints;
pub mod numeric;

pub use builder::{build, build_from_spec};
pub use constraints::{check, decimal_digits, quantize, verify, MAX_SCALE};
pub use numeric::parse_positive_decimal;
