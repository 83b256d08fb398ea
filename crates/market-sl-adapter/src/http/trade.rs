/*
[INPUT]:  Conditional-order requests and API credentials
[OUTPUT]: Created conditional order
[POS]:    HTTP layer - trading endpoints (require HMAC signature headers)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, info};

use crate::http::{BittrexClient, Result};
use crate::types::{ApiCredentials, ConditionalOrder, ConditionalOrderRequest};

impl BittrexClient {
    /// Create a conditional order
    ///
    /// POST /v3/conditional-orders
    /// Requires: Api-Key, Api-Timestamp, Api-Content-Hash, Api-Signature
    pub async fn submit_conditional_order(
        &self,
        req: &ConditionalOrderRequest,
        credentials: &ApiCredentials,
    ) -> Result<ConditionalOrder> {
        let url = self.endpoint_url(&["v3", "conditional-orders"])?;
        // The hash must cover the exact bytes sent, so serialize once.
        let body = serde_json::to_string(req)?;
        let signed = self.signer().sign(Method::POST.as_str(), url.as_str(), &body, credentials)?;
        debug!(%url, timestamp = %signed.timestamp, content_hash = %signed.content_hash, "submitting conditional order");

        let builder = self
            .request(Method::POST, url)
            .headers(signed.headers()?)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        // A 2xx means the order was placed; the body is decoded leniently.
        let (_, text) = self.send_text(builder).await?;
        let order = ConditionalOrder::from_body(&text);
        info!(id = ?order.id, market_symbol = ?order.market_symbol, "conditional order created");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::auth::{content_hash, FixedClock};
    use crate::http::{BittrexClient, ClientConfig, RequestSigner, SlError};
    use crate::order::build;
    use crate::types::{ApiCredentials, ConditionalOrderStatus};

    fn client_for(server: &MockServer) -> BittrexClient {
        BittrexClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
        .with_signer(RequestSigner::new(Arc::new(FixedClock(1_700_000_000_000))))
    }

    #[tokio::test]
    async fn test_submit_conditional_order_signed() {
        let server = MockServer::start().await;
        let response = serde_json::json!({
            "id": "9d9c6d9a-6a0e-4b8a-9b67-6e8d2c1c4f10",
            "marketSymbol": "BTC-USD",
            "operand": "LTE",
            "triggerPrice": "50000",
            "status": "OPEN",
            "createdAt": "2023-11-14T22:13:20Z"
        });

        let _mock = Mock::given(method("POST"))
            .and(path("/v3/conditional-orders"))
            .and(header("Api-Key", "key-1"))
            .and(header("Api-Timestamp", "1700000000000"))
            .and(header_exists("Api-Content-Hash"))
            .and(header_exists("Api-Signature"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(201).set_body_json(response))
            .expect(1)
            .mount(&server)
            .await;

        let request = build("BTC-USD", Decimal::from(50000), Decimal::from(1));
        let order = client_for(&server)
            .submit_conditional_order(&request, &ApiCredentials::new("key-1", "secret-1"))
            .await
            .expect("submit failed");

        assert_eq!(order.market_symbol.as_deref(), Some("BTC-USD"));
        assert_eq!(order.status, Some(ConditionalOrderStatus::Open));

        let received = server.received_requests().await.expect("recording enabled");
        assert_eq!(received.len(), 1);
        let sent_body = std::str::from_utf8(&received[0].body).expect("utf8 body");
        assert_eq!(sent_body, serde_json::to_string(&request).unwrap());
        assert_eq!(
            received[0].headers["api-content-hash"],
            content_hash(sent_body).unwrap().as_str()
        );
    }

    #[tokio::test]
    async fn test_submit_conditional_order_minimal_response() {
        let server = MockServer::start().await;
        let body = r#"{"id":"abc","marketSymbol":"BTC-USD","status":"OPEN"}"#;
        let _mock = Mock::given(method("POST"))
            .and(path("/v3/conditional-orders"))
            .respond_with(ResponseTemplate::new(201).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let request = build("BTC-USD", Decimal::from(50000), Decimal::from(1));
        let order = client_for(&server)
            .submit_conditional_order(&request, &ApiCredentials::new("key-1", "secret-1"))
            .await
            .expect("placed order must not fail to decode");

        assert_eq!(order.id.as_deref(), Some("abc"));
        assert_eq!(order.operand, None);
        assert_eq!(order.confirmation(), body);
    }

    #[tokio::test]
    async fn test_submit_conditional_order_rejected() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v3/conditional-orders"))
            .respond_with(
                ResponseTemplate::new(401).set_body_raw(r#"{"code":"INVALID_SIGNATURE"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = build("BTC-USD", Decimal::from(50000), Decimal::from(1));
        let err = client_for(&server)
            .submit_conditional_order(&request, &ApiCredentials::new("key-1", "secret-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, SlError::Http { status: 401, ref body } if body == r#"{"code":"INVALID_SIGNATURE"}"#));
    }
}
