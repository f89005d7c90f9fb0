// ============================================================================
// WALLET FFI - Foreign Function Interface to the injected wallet adapter
// ============================================================================
// Thin wrappers over the JS wallet bridge - no state, no logic. The bridge
// dispatches a "walletAccountChanged" CustomEvent (detail.address) whenever
// the connected account changes; components/app.rs listens for it.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Open the wallet-selection dialog of the adapter.
    #[wasm_bindgen(js_name = walletConnect)]
    pub fn wallet_connect();

    /// Drop the current wallet session.
    #[wasm_bindgen(js_name = walletDisconnect)]
    pub fn wallet_disconnect();

    /// Sign and submit a programmable call described as JSON. Resolves with
    /// `{ digest }`, rejects with an Error carrying the wallet's message.
    #[wasm_bindgen(js_name = walletSignAndExecute)]
    pub fn wallet_sign_and_execute(tx_json: &str) -> js_sys::Promise;
}

/// Best-effort extraction of a human-readable message from a rejected
/// promise value.
pub fn js_error_message(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
