/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public stop-loss adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod order;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Clock, FixedClock, SystemClock};

// Re-export commonly used types from http
pub use http::{
    BittrexClient,
    ClientConfig,
    RequestSigner,
    Result,
    SignedRequest,
    SlError,
};

// Re-export all types
pub use types::*;
