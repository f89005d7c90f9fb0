//! zkLogin session path: OAuth redirect URL, id_token extraction from the
//! URL fragment and deterministic address derivation from the token claims.
//!
//! The derived address has no wallet behind it; `AddressOrigin::ZkLogin`
//! marks it so the mint client knows it cannot sign. Full zkLogin proving
//! with ephemeral keys is not wired up yet.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::utils::constants::GOOGLE_CLIENT_ID;

const ADDRESS_DOMAIN_TAG: &[u8] = b"ensoku-zklogin-address-v1";

/// Google implicit-flow authorization URL. The provider redirects back with
/// `#id_token=...` in the fragment.
pub fn authorization_url(redirect_uri: &str, nonce: &str) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth\
         ?client_id={GOOGLE_CLIENT_ID}\
         &response_type=id_token\
         &redirect_uri={redirect_uri}\
         &scope=openid\
         &nonce={nonce}"
    )
}

/// Extract the id_token parameter from a URL fragment like
/// `#id_token=eyJ...&authuser=0`.
pub fn id_token_from_fragment(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .split('&')
        .find_map(|pair| pair.strip_prefix("id_token="))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Read the id_token from the current URL, then scrub the fragment from the
/// visible URL so the token does not linger in the address bar or history.
pub fn take_id_token_from_url() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let hash = location.hash().ok()?;
    if !hash.contains("id_token") {
        return None;
    }

    let token = id_token_from_fragment(&hash);
    if token.is_some() {
        if let (Ok(history), Ok(pathname)) = (window.history(), location.pathname()) {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&pathname),
            );
        }
    }
    token
}

/// Derive a deterministic chain address from the token's identity claims
/// (`iss`, `sub`, `aud`): SHA-256 over a domain tag and the separated
/// claims, rendered as `0x` + 32-byte hex.
pub fn derive_address(id_token: &str) -> Result<String, String> {
    let payload = id_token
        .split('.')
        .nth(1)
        .ok_or_else(|| "malformed token: missing payload".to_string())?;
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| format!("payload decode error: {}", e))?;
    let claims: serde_json::Value =
        serde_json::from_slice(&decoded).map_err(|e| format!("claims parse error: {}", e))?;

    let sub = claims
        .get("sub")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "token has no sub claim".to_string())?;
    let iss = claims.get("iss").and_then(|v| v.as_str()).unwrap_or("");
    // aud is a string for Google tokens, but the spec allows an array.
    let aud = match claims.get("aud") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(items)) => items
            .first()
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        _ => String::new(),
    };

    let mut hasher = Sha256::new();
    hasher.update(ADDRESS_DOMAIN_TAG);
    for claim in [iss, sub, &aud] {
        hasher.update([0u8]);
        hasher.update(claim.as_bytes());
    }

    Ok(format!("0x{}", hex::encode(hasher.finalize())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(claims: serde_json::Value) -> String {
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("e30.{}.sig", payload)
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(
            id_token_from_fragment("#id_token=abc.def.ghi&authuser=0"),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(
            id_token_from_fragment("state=x&id_token=tok"),
            Some("tok".to_string())
        );
        assert_eq!(id_token_from_fragment("#state=x"), None);
        assert_eq!(id_token_from_fragment("#id_token="), None);
    }

    #[test]
    fn derivation_is_deterministic() {
        let claims = serde_json::json!({
            "iss": "https://accounts.google.com",
            "sub": "110169484474386276334",
            "aud": "ensoku-dev.apps.googleusercontent.com",
        });
        let a = derive_address(&token_for(claims.clone())).unwrap();
        let b = derive_address(&token_for(claims)).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("0x"));
        assert_eq!(a.len(), 2 + 64);
    }

    #[test]
    fn different_subjects_get_different_addresses() {
        let a = derive_address(&token_for(serde_json::json!({"sub": "alice"}))).unwrap();
        let b = derive_address(&token_for(serde_json::json!({"sub": "bob"}))).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn aud_array_is_accepted() {
        let claims = serde_json::json!({"sub": "alice", "aud": ["first", "second"]});
        let with_array = derive_address(&token_for(claims)).unwrap();
        let with_string = derive_address(&token_for(
            serde_json::json!({"sub": "alice", "aud": "first"}),
        ))
        .unwrap();
        assert_eq!(with_array, with_string);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(derive_address("not-a-jwt").is_err());
        assert!(derive_address("a.!!!.c").is_err());
        // Valid base64, but no sub claim.
        let no_sub = token_for(serde_json::json!({"iss": "x"}));
        assert!(derive_address(&no_sub).is_err());
    }

    #[test]
    fn authorization_url_shape() {
        let url = authorization_url("https://ensoku.example/", "n0nce");
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("response_type=id_token"));
        assert!(url.contains("nonce=n0nce"));
    }
}
