/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for market-sl-adapter tests

use std::sync::Arc;

use market_sl_adapter::{BittrexClient, ClientConfig, FixedClock, RequestSigner};
use wiremock::MockServer;

pub const FIXED_TIMESTAMP: u64 = 1_700_000_000_000;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with a frozen signing clock
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> BittrexClient {
    BittrexClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
    .with_signer(RequestSigner::new(Arc::new(FixedClock(FIXED_TIMESTAMP))))
}

/// Market info body as returned by GET /v3/markets/{symbol}
#[allow(dead_code)]
pub fn market_info_json(symbol: &str, min_trade_size: &str, precision: u32) -> serde_json::Value {
    serde_json::json!({
        "symbol": symbol,
        "baseCurrencySymbol": symbol.split('-').next().unwrap_or_default(),
        "quoteCurrencySymbol": symbol.split('-').nth(1).unwrap_or_default(),
        "minTradeSize": min_trade_size,
        "precision": precision,
        "status": "ONLINE",
        "createdAt": "2017-04-20T17:26:37.647Z"
    })
}
