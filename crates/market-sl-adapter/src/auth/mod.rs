/*
[INPUT]:  API secret, message text, wall-clock time
[OUTPUT]: Content hashes, HMAC signatures, timestamps
[POS]:    Auth layer - signing primitives
[UPDATE]: When adding new auth primitives
*/

pub mod clock;
pub mod hmac_signer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use hmac_signer::{content_hash, latin1_bytes, HmacSigner};
