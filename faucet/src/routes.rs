//! HTTP surface of the faucet: one POST route plus its preflight, with the
//! permissive CORS header set stamped onto every response.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::FaucetConfig;
use crate::transfer;

const ALLOWED_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
const ALLOWED_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
                               Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

#[derive(Clone)]
pub struct AppState {
    /// `None` when ADMIN_SECRET_KEY was absent at startup; every faucet
    /// request then gets the configuration-error response.
    pub config: Option<Arc<FaucetConfig>>,
}

pub fn create_router(state: AppState) -> Router {
    // The header layers wrap the whole router, so error responses and the
    // preflight short-circuit carry the CORS set too.
    Router::new()
        .route("/api/faucet", post(pour).options(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn pour(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> (StatusCode, Json<Value>) {
    // Tolerate an absent or malformed body the same as a missing field.
    let address = body
        .as_ref()
        .and_then(|Json(value)| value.get("address"))
        .and_then(|a| a.as_str())
        .filter(|a| !a.is_empty())
        .map(|a| a.to_string());

    let Some(address) = address else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Address is required" })),
        );
    };

    let Some(config) = state.config else {
        tracing::error!("ADMIN_SECRET_KEY is not set");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Server configuration error" })),
        );
    };

    match transfer::send_allowance(&config, &address).await {
        Ok(digest) => (
            StatusCode::OK,
            Json(json!({ "success": true, "digest": digest })),
        ),
        Err(e) => {
            tracing::error!(error = %e, %address, "faucet grant failed");
            let message = e.to_string();
            let message = if message.is_empty() {
                "Faucet failed".to_string()
            } else {
                message
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
        }
    }
}
