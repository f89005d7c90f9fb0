//! The grant itself: decode the signer, pick a gas coin, build, sign and
//! submit. Each invocation is independent; no retries, no idempotence.

use crate::config::FaucetConfig;
use crate::error::FaucetError;
use crate::key::FaucetKeypair;
use crate::rpc::RpcClient;

pub async fn send_allowance(config: &FaucetConfig, recipient: &str) -> Result<String, FaucetError> {
    let keypair = FaucetKeypair::decode(&config.admin_key)?;
    let sender = keypair.address();
    let rpc = RpcClient::new(&config.rpc_url);

    tracing::info!(%recipient, amount = config.amount, "pouring faucet grant");

    // The coin must cover the grant and the gas for the same transaction.
    let coin = rpc
        .first_gas_coin(&sender, config.amount + config.gas_budget)
        .await?;
    let tx_bytes = rpc
        .build_transfer(&sender, &coin, config.gas_budget, recipient, config.amount)
        .await?;
    let signature = keypair.sign_transaction(&tx_bytes)?;
    let digest = rpc.execute(&tx_bytes, &signature).await?;

    tracing::info!(%digest, "faucet grant submitted");
    Ok(digest)
}
