/*
[INPUT]:  Market symbol
[OUTPUT]: Market metadata (min trade size, price precision)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BittrexClient, Result};
use crate::types::MarketInfo;
use reqwest::Method;
use tracing::debug;

impl BittrexClient {
    /// Query market information
    ///
    /// GET /v3/markets/{marketSymbol}
    pub async fn get_market_info(&self, market_symbol: &str) -> Result<MarketInfo> {
        let url = self.endpoint_url(&["v3", "markets", market_symbol])?;
        debug!(%url, "fetching market info");
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BittrexClient, ClientConfig, SlError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BittrexClient {
        BittrexClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_market_info() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "symbol": "BTC-USD",
            "baseCurrencySymbol": "BTC",
            "quoteCurrencySymbol": "USD",
            "minTradeSize": "0.00010000",
            "precision": 3,
            "status": "ONLINE",
            "createdAt": "2018-05-23T20:20:25.077Z",
            "notice": "",
            "prohibitedIn": [],
            "associatedTermsOfService": [],
            "tags": []
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v3/markets/BTC-USD"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let info = client_for(&server)
            .get_market_info("BTC-USD")
            .await
            .expect("get_market_info failed");

        assert_eq!(info.symbol, "BTC-USD");
        assert_eq!(info.base_currency_symbol, "BTC");
        assert_eq!(info.quote_currency_symbol, "USD");
        assert_eq!(info.min_trade_size, "0.0001".parse().expect("min_trade_size"));
        assert_eq!(info.precision, 3);
    }

    #[tokio::test]
    async fn test_get_market_info_not_found() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/v3/markets/NOPE-USD"))
            .respond_with(
                ResponseTemplate::new(404).set_body_raw(r#"{"code":"MARKET_DOES_NOT_EXIST"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_market_info("NOPE-USD")
            .await
            .unwrap_err();

        match err {
            SlError::Http { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, r#"{"code":"MARKET_DOES_NOT_EXIST"}"#);
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_market_info_malformed_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/v3/markets/BTC-USD"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_market_info("BTC-USD").await.unwrap_err();
        assert!(matches!(err, SlError::InvalidResponse(_)));
    }
}
