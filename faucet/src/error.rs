use crate::key::KeyError;

#[derive(Debug, thiserror::Error)]
pub enum FaucetError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error("RPC transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("faucet has no gas coin with sufficient balance")]
    NoGasCoin,
}
