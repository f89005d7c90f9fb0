//! Faucet client: one POST per click to the faucet endpoint, with an
//! explicit classification of failures so the UI can decide between an error
//! banner and the local-development simulation fallback.

use gloo_net::http::Request;

use crate::models::FaucetResponse;
use crate::utils::constants::FAUCET_URL;

/// How a faucet request failed. `EndpointMissing` is the narrow class the UI
/// answers with a simulated success: the handler is simply not deployed, so
/// the static host returned 404 or served the SPA shell instead of JSON.
/// Best-effort - a misconfigured proxy can still land here.
#[derive(Debug, Clone, PartialEq)]
pub enum FaucetFailure {
    EndpointMissing,
    Rejected(String),
    Network(String),
}

impl FaucetFailure {
    pub fn message(&self) -> &str {
        match self {
            FaucetFailure::EndpointMissing => "faucet endpoint not found",
            FaucetFailure::Rejected(msg) | FaucetFailure::Network(msg) => msg,
        }
    }
}

/// Request the fixed token grant for `address`. No retry: a failed request
/// surfaces once and needs a new click.
pub async fn request_funds(address: &str) -> Result<FaucetResponse, FaucetFailure> {
    log::info!("💧 Requesting faucet grant for {}", address);

    let body = serde_json::json!({ "address": address });
    let response = Request::post(FAUCET_URL)
        .json(&body)
        .map_err(|e| FaucetFailure::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| FaucetFailure::Network(format!("Network error: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FaucetFailure::Network(format!("Read error: {}", e)))?;

    classify(status, &text)
}

/// Map an HTTP status + body to the client outcome. Kept pure so the
/// classification rules are testable without a browser.
pub fn classify(status: u16, body: &str) -> Result<FaucetResponse, FaucetFailure> {
    if status == 404 {
        return Err(FaucetFailure::EndpointMissing);
    }

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        // Not JSON at all: the host answered with its HTML shell.
        Err(_) => return Err(FaucetFailure::EndpointMissing),
    };

    if (200..300).contains(&status) {
        let digest = value
            .get("digest")
            .and_then(|d| d.as_str())
            .map(|d| d.to_string());
        Ok(FaucetResponse { success: true, digest })
    } else {
        let message = value
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or("給水に失敗しました")
            .to_string();
        Err(FaucetFailure::Rejected(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_digest() {
        let out = classify(200, r#"{"success":true,"digest":"9f2A"}"#).unwrap();
        assert!(out.success);
        assert_eq!(out.digest.as_deref(), Some("9f2A"));
    }

    #[test]
    fn not_found_means_endpoint_missing() {
        assert_eq!(
            classify(404, r#"{"error":"not found"}"#),
            Err(FaucetFailure::EndpointMissing)
        );
    }

    #[test]
    fn html_shell_means_endpoint_missing() {
        // A static host without the handler serves index.html with 200.
        assert_eq!(
            classify(200, "<!doctype html><html></html>"),
            Err(FaucetFailure::EndpointMissing)
        );
    }

    #[test]
    fn server_error_surfaces_its_message() {
        assert_eq!(
            classify(500, r#"{"error":"Server configuration error"}"#),
            Err(FaucetFailure::Rejected("Server configuration error".into()))
        );
    }

    #[test]
    fn json_error_without_message_gets_fallback() {
        assert_eq!(
            classify(500, r#"{"unexpected":true}"#),
            Err(FaucetFailure::Rejected("給水に失敗しました".into()))
        );
    }

    #[test]
    fn client_error_is_rejected_not_simulated() {
        // 400 with a JSON body must never trigger the simulation path.
        assert_eq!(
            classify(400, r#"{"error":"Address is required"}"#),
            Err(FaucetFailure::Rejected("Address is required".into()))
        );
    }
}
