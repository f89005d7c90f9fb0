//! Minimal JSON-RPC client for the fullnode: find a gas coin, build the
//! transfer, submit the signed transaction. One client per invocation, no
//! pooling.

use serde_json::{json, Value};

use crate::error::FaucetError;

pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: &str) -> Self {
        Self { http: reqwest::Client::new(), url: url.to_string() }
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, FaucetError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self.http.post(&self.url).json(&payload).send().await?;
        let body: Value = response.json().await?;

        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown RPC error");
            return Err(FaucetError::Rpc(format!("{}: {}", method, message)));
        }

        body.get("result")
            .cloned()
            .ok_or_else(|| FaucetError::Rpc(format!("{}: missing result", method)))
    }

    /// First SUI coin owned by `owner` whose balance covers `min_balance`.
    pub async fn first_gas_coin(&self, owner: &str, min_balance: u64) -> Result<String, FaucetError> {
        let result = self
            .call("suix_getCoins", json!([owner, SUI_COIN_TYPE]))
            .await?;
        pick_gas_coin(&result, min_balance).ok_or(FaucetError::NoGasCoin)
    }

    /// Build the transfer of `amount` base units out of `coin` to
    /// `recipient`; returns the base64 transaction bytes to sign.
    pub async fn build_transfer(
        &self,
        sender: &str,
        coin: &str,
        gas_budget: u64,
        recipient: &str,
        amount: u64,
    ) -> Result<String, FaucetError> {
        let result = self
            .call(
                "unsafe_transferSui",
                json!([
                    sender,
                    coin,
                    gas_budget.to_string(),
                    recipient,
                    amount.to_string(),
                ]),
            )
            .await?;

        result
            .get("txBytes")
            .and_then(|b| b.as_str())
            .map(|b| b.to_string())
            .ok_or_else(|| FaucetError::Rpc("unsafe_transferSui: missing txBytes".to_string()))
    }

    /// Submit the signed transaction; returns its digest.
    pub async fn execute(&self, tx_bytes: &str, signature: &str) -> Result<String, FaucetError> {
        let result = self
            .call(
                "sui_executeTransactionBlock",
                json!([tx_bytes, [signature], { "showEffects": false }, null]),
            )
            .await?;

        result
            .get("digest")
            .and_then(|d| d.as_str())
            .map(|d| d.to_string())
            .ok_or_else(|| {
                FaucetError::Rpc("sui_executeTransactionBlock: missing digest".to_string())
            })
    }
}

/// Select the first coin in a `suix_getCoins` result with enough balance.
pub fn pick_gas_coin(result: &Value, min_balance: u64) -> Option<String> {
    result
        .get("data")?
        .as_array()?
        .iter()
        .find_map(|coin| {
            let balance = coin.get("balance")?.as_str()?.parse::<u64>().ok()?;
            if balance < min_balance {
                return None;
            }
            coin.get("coinObjectId")?
                .as_str()
                .map(|id| id.to_string())
        })
}
