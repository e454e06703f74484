use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use tower::ServiceExt;

use fxbridge_rates::{
    MirrorConfig, MirrorResponse, MirrorTransport, RateService, TransportError,
};
use fxbridge_server::{api::app_router, AppState};

const PRIMARY_BASE: &str = "http://primary.test/v1";
const FALLBACK_BASE: &str = "http://fallback.test/v1";

const USD_DOC: &str = r#"{"date":"2024-01-01","usd":{"eur":0.9,"jpy":150}}"#;

/// Transport fake serving canned responses, recording every URL hit.
#[derive(Default)]
struct FakeTransport {
    responses: Mutex<HashMap<String, Result<MirrorResponse, TransportError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    fn with(responses: Vec<(String, Result<MirrorResponse, TransportError>)>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MirrorTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<MirrorResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.lock().unwrap().get(url) {
            Some(result) => result.clone(),
            None => Err(TransportError::Other(format!("no fixture for {url}"))),
        }
    }
}

fn ok(status: u16, body: &str) -> Result<MirrorResponse, TransportError> {
    Ok(MirrorResponse {
        status,
        body: body.to_string(),
    })
}

fn primary(path: &str) -> String {
    format!("{PRIMARY_BASE}/{path}")
}

fn fallback(path: &str) -> String {
    format!("{FALLBACK_BASE}/{path}")
}

fn build_test_app(
    responses: Vec<(String, Result<MirrorResponse, TransportError>)>,
) -> (axum::Router, Arc<FakeTransport>) {
    let transport = Arc::new(FakeTransport::with(responses));
    let config = MirrorConfig {
        primary_base: PRIMARY_BASE.to_string(),
        fallback_base: FALLBACK_BASE.to_string(),
        timeout: Duration::from_secs(30),
    };
    let state = Arc::new(AppState {
        rate_service: Arc::new(RateService::new(config, transport.clone())),
    });
    (app_router(state), transport)
}

async fn get_json(app: axum::Router, uri: &str) -> (u16, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_returns_200_without_network_call() {
    let (app, transport) = build_test_app(vec![]);
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Currency Converter API");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
    assert_eq!(body["developer"], "El Impaciente");
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn root_lists_endpoints_and_features() {
    let (app, transport) = build_test_app(vec![]);
    let (status, body) = get_json(app, "/").await;

    assert_eq!(status, 200);
    assert_eq!(body["status_code"], 200);
    assert_eq!(
        body["endpoints"]["/rates"],
        "Get all rates for a currency - Use: /rates?currency=USD"
    );
    assert!(body["features"].as_array().unwrap().len() >= 4);
    assert_eq!(body["telegram_channel"], "https://t.me/Apisimpacientes");
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn currencies_reports_catalog_and_count() {
    let (app, _) = build_test_app(vec![(
        primary("currencies.json"),
        ok(200, r#"{"usd":"US Dollar","eur":"Euro"}"#),
    )]);
    let (status, body) = get_json(app, "/currencies").await;

    assert_eq!(status, 200);
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["total_currencies"], 2);
    assert_eq!(body["currencies"]["usd"], "US Dollar");
    assert_eq!(body["developer"], "El Impaciente");
}

#[tokio::test]
async fn currencies_timeout_returns_408() {
    let (app, _) = build_test_app(vec![
        (primary("currencies.json"), Err(TransportError::Timeout)),
        (fallback("currencies.json"), Err(TransportError::Timeout)),
    ]);
    let (status, body) = get_json(app, "/currencies").await;

    assert_eq!(status, 408);
    assert_eq!(body["status_code"], 408);
    assert_eq!(
        body["message"],
        "Request timeout. The external API took too long to respond"
    );
}

#[tokio::test]
async fn currencies_unreachable_mirrors_return_500_with_detail() {
    let (app, _) = build_test_app(vec![
        (
            primary("currencies.json"),
            Err(TransportError::Other("dns failure".to_string())),
        ),
        (
            fallback("currencies.json"),
            Err(TransportError::Other("dns failure".to_string())),
        ),
    ]);
    let (status, body) = get_json(app, "/currencies").await;

    assert_eq!(status, 500);
    assert_eq!(body["message"], "Error fetching currencies list");
    assert!(body["error"].as_str().unwrap().contains("dns failure"));
}

#[tokio::test]
async fn rates_returns_normalized_table() {
    let (app, _) = build_test_app(vec![(primary("currencies/usd.json"), ok(200, USD_DOC))]);
    let (status, body) = get_json(app, "/rates?currency=usd").await;

    assert_eq!(status, 200);
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["base_currency"], "USD");
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["total_rates"], 2);
    assert_eq!(body["rates"]["eur"], 0.9);
    assert_eq!(body["rates"]["jpy"], 150);
}

#[tokio::test]
async fn rates_missing_currency_is_400_with_example_and_no_network_call() {
    let (app, transport) = build_test_app(vec![]);
    let (status, body) = get_json(app, "/rates").await;

    assert_eq!(status, 400);
    assert_eq!(body["status_code"], 400);
    assert_eq!(body["message"], "Parameter 'currency' is required");
    assert_eq!(body["example"], "/rates?currency=USD");
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn rates_unknown_currency_is_400() {
    let (app, _) = build_test_app(vec![
        (primary("currencies/zzz.json"), ok(404, "")),
        (fallback("currencies/zzz.json"), ok(404, "")),
    ]);
    let (status, body) = get_json(app, "/rates?currency=ZZZ").await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Currency 'ZZZ' not found or invalid");
}

#[tokio::test]
async fn convert_returns_rounded_amount_and_calculation() {
    let (app, _) = build_test_app(vec![(primary("currencies/usd.json"), ok(200, USD_DOC))]);
    let (status, body) = get_json(app, "/convert?amount=100&from=USD&to=EUR").await;

    assert_eq!(status, 200);
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["original"]["amount"], 100.0);
    assert_eq!(body["original"]["currency"], "USD");
    assert_eq!(body["converted"]["amount"], 90.0);
    assert_eq!(body["converted"]["currency"], "EUR");
    assert_eq!(body["exchange_rate"], 0.9);
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["calculation"], "100.0 USD × 0.9 = 90.0 EUR");
}

#[tokio::test]
async fn convert_validation_order_reports_from_first() {
    let (app, transport) = build_test_app(vec![]);
    let (status, body) = get_json(app, "/convert").await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Parameter 'from' is required");
    assert_eq!(body["example"], "/convert?amount=100&from=USD&to=EUR");
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn convert_zero_amount_is_400() {
    let (app, transport) = build_test_app(vec![]);
    let (status, body) = get_json(app, "/convert?from=USD&to=EUR").await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Parameter 'amount' must be greater than 0");
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn convert_unknown_target_is_400() {
    let (app, _) = build_test_app(vec![(primary("currencies/usd.json"), ok(200, USD_DOC))]);
    let (status, body) = get_json(app, "/convert?amount=10&from=usd&to=zzz").await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Target currency 'ZZZ' not found or invalid");
}

#[tokio::test]
async fn convert_uses_exactly_one_fallback_when_primary_fails() {
    let (app, transport) = build_test_app(vec![
        (primary("currencies/usd.json"), ok(503, "unavailable")),
        (fallback("currencies/usd.json"), ok(200, USD_DOC)),
    ]);
    let (status, body) = get_json(app, "/convert?amount=100&from=USD&to=EUR").await;

    assert_eq!(status, 200);
    assert_eq!(body["converted"]["amount"], 90.0);
    assert_eq!(
        transport.calls(),
        vec![
            primary("currencies/usd.json"),
            fallback("currencies/usd.json")
        ]
    );
}
