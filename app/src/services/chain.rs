//! Chain access: the mint call handed to the wallet bridge, and the
//! owned-objects query against the testnet fullnode.

use gloo_net::http::Request;
use wasm_bindgen_futures::JsFuture;

use crate::models::OwnedSnack;
use crate::utils::constants::{
    FULLNODE_URL, MINT_FUNCTION, MODULE_NAME, PACKAGE_ID, SNACK_COLOR, SNACK_FLAVOR,
    SNACK_LOCATION,
};
use crate::utils::wallet_ffi::{js_error_message, wallet_sign_and_execute};

/// JSON description of the mint call, consumed by the wallet bridge. Three
/// fixed string arguments in fixed order: location, flavor, color.
pub fn mint_call_json() -> String {
    serde_json::json!({
        "kind": "moveCall",
        "target": format!("{}::{}::{}", PACKAGE_ID, MODULE_NAME, MINT_FUNCTION),
        "arguments": [SNACK_LOCATION, SNACK_FLAVOR, SNACK_COLOR],
    })
    .to_string()
}

/// Sign and submit the mint call through the connected wallet. Resolves to
/// the transaction digest.
pub async fn sign_and_execute_mint() -> Result<String, String> {
    let promise = wallet_sign_and_execute(&mint_call_json());
    let result = JsFuture::from(promise)
        .await
        .map_err(|e| js_error_message(&e))?;

    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(result).map_err(|e| format!("Parse error: {}", e))?;
    Ok(value
        .get("digest")
        .and_then(|d| d.as_str())
        .unwrap_or_default()
        .to_string())
}

/// Fetch the snacks owned by `owner` with display metadata.
pub async fn fetch_owned_snacks(owner: &str) -> Result<Vec<OwnedSnack>, String> {
    let payload = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "suix_getOwnedObjects",
        "params": [
            owner,
            { "options": { "showContent": true, "showDisplay": true } },
        ],
    });

    let response = Request::post(FULLNODE_URL)
        .json(&payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("RPC error");
        return Err(message.to_string());
    }

    let snacks = parse_owned_objects(&body);
    log::info!("🍡 Owned snacks: {}", snacks.len());
    Ok(snacks)
}

/// Pull `objectId` and `display.data.image_url` out of a
/// `suix_getOwnedObjects` response.
pub fn parse_owned_objects(body: &serde_json::Value) -> Vec<OwnedSnack> {
    body.get("result")
        .and_then(|r| r.get("data"))
        .and_then(|d| d.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let data = entry.get("data")?;
                    let object_id = data.get("objectId")?.as_str()?.to_string();
                    let image_url = data
                        .get("display")
                        .and_then(|d| d.get("data"))
                        .and_then(|d| d.get("image_url"))
                        .and_then(|u| u.as_str())
                        .map(|u| u.to_string());
                    Some(OwnedSnack { object_id, image_url })
                })
                .collect()
        })
        .unwrap_or_default()
}
