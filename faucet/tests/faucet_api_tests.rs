use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bech32::{ToBase32, Variant};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use ensoku_faucet::config::{FaucetConfig, DEFAULT_RPC_URL, GAS_BUDGET, GRANT_AMOUNT};
use ensoku_faucet::key::{ED25519_FLAG, SUI_PRIV_KEY_PREFIX};
use ensoku_faucet::routes::{create_router, AppState};

fn unconfigured_router() -> Router {
    create_router(AppState { config: None })
}

fn router_with_key(admin_key: &str) -> Router {
    let config = FaucetConfig {
        admin_key: admin_key.to_string(),
        rpc_url: DEFAULT_RPC_URL.to_string(),
        amount: GRANT_AMOUNT,
        gas_budget: GAS_BUDGET,
    };
    create_router(AppState { config: Some(Arc::new(config)) })
}

fn encode_key(flag: u8) -> String {
    let mut payload = vec![flag];
    payload.extend_from_slice(&[9u8; 32]);
    bech32::encode(SUI_PRIV_KEY_PREFIX, payload.to_base32(), Variant::Bech32).unwrap()
}

fn post_faucet(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/faucet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_cors_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET,OPTIONS,PATCH,DELETE,POST,PUT"
    );
    let allow_headers = headers["access-control-allow-headers"].to_str().unwrap();
    for name in ["X-CSRF-Token", "Content-Type", "X-Api-Version"] {
        assert!(allow_headers.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn missing_address_yields_400() {
    let response = unconfigured_router()
        .oneshot(post_faucet("{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(response.headers());
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Address is required" })
    );
}

#[tokio::test]
async fn empty_address_yields_400() {
    let response = unconfigured_router()
        .oneshot(post_faucet(r#"{"address":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Address is required" })
    );
}

#[tokio::test]
async fn absent_body_yields_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/faucet")
        .body(Body::empty())
        .unwrap();
    let response = unconfigured_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Address is required" })
    );
}

#[tokio::test]
async fn unconfigured_key_yields_500() {
    let response = unconfigured_router()
        .oneshot(post_faucet(r#"{"address":"0xabc"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(response.headers());
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Server configuration error" })
    );
}

#[tokio::test]
async fn undecodable_key_yields_500_with_message() {
    let response = router_with_key("definitely not a suiprivkey")
        .oneshot(post_faucet(r#"{"address":"0xabc"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty());
}

#[tokio::test]
async fn unsupported_scheme_yields_500_with_scheme_message() {
    // 0x01 = Secp256k1; the handler only accepts Ed25519 secrets.
    let response = router_with_key(&encode_key(0x01))
        .oneshot(post_faucet(r#"{"address":"0xabc"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("ED25519"));
}

#[tokio::test]
async fn preflight_returns_200_with_cors_and_empty_body() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/faucet")
        .body(Body::empty())
        .unwrap();
    let response = unconfigured_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(response.headers());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn ed25519_key_reaches_the_rpc_stage() {
    // A valid Ed25519 secret gets past validation; with no fullnode
    // reachable in tests the failure must be an RPC one, not a key or
    // configuration error.
    let config = FaucetConfig {
        admin_key: encode_key(ED25519_FLAG),
        // Nothing listens here.
        rpc_url: "http://127.0.0.1:1".to_string(),
        amount: GRANT_AMOUNT,
        gas_budget: GAS_BUDGET,
    };
    let router = create_router(AppState { config: Some(Arc::new(config)) });

    let response = router
        .oneshot(post_faucet(r#"{"address":"0xabc"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert_ne!(message, "Server configuration error");
    assert!(!message.contains("ED25519"));
}
