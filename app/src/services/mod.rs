// Services - SOLO comunicación externa (faucet HTTP, fullnode RPC, zkLogin)

pub mod chain;
pub mod faucet;
pub mod zklogin;
