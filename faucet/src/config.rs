//! Faucet configuration, loaded once from the process environment at
//! startup. A missing signing key does not abort the process: the server
//! keeps answering so every faucet request gets the configuration-error
//! response instead of a connection failure.

/// Testnet fullnode used to build and submit the grant transaction.
pub const DEFAULT_RPC_URL: &str = "https://fullnode.testnet.sui.io:443";

/// Fixed grant: 0.05 SUI in base units.
pub const GRANT_AMOUNT: u64 = 50_000_000;

/// Gas budget for the transfer transaction.
pub const GAS_BUDGET: u64 = 10_000_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ADMIN_SECRET_KEY is not set")]
    MissingAdminKey,
}

#[derive(Debug, Clone)]
pub struct FaucetConfig {
    /// Bech32-encoded `suiprivkey` secret of the faucet signer.
    pub admin_key: String,
    pub rpc_url: String,
    pub amount: u64,
    pub gas_budget: u64,
}

impl FaucetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Env-independent constructor so validation is testable without
    /// mutating process state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let admin_key = lookup("ADMIN_SECRET_KEY")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingAdminKey)?;
        let rpc_url = lookup("ENSOKU_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        Ok(Self {
            admin_key,
            rpc_url,
            amount: GRANT_AMOUNT,
            gas_budget: GAS_BUDGET,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_an_error() {
        let result = FaucetConfig::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingAdminKey)));
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let result = FaucetConfig::from_lookup(|key| {
            (key == "ADMIN_SECRET_KEY").then(String::new)
        });
        assert!(matches!(result, Err(ConfigError::MissingAdminKey)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = FaucetConfig::from_lookup(|key| {
            (key == "ADMIN_SECRET_KEY").then(|| "suiprivkey1dummy".to_string())
        })
        .unwrap();

        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.amount, 50_000_000);
        assert_eq!(config.gas_budget, GAS_BUDGET);
    }

    #[test]
    fn rpc_url_override() {
        let config = FaucetConfig::from_lookup(|key| match key {
            "ADMIN_SECRET_KEY" => Some("suiprivkey1dummy".to_string()),
            "ENSOKU_RPC_URL" => Some("http://localhost:9000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.rpc_url, "http://localhost:9000");
    }
}
