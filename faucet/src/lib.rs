//! Stateless faucet handler: validates an address, decodes the server-held
//! Ed25519 key and submits a fixed-amount transfer on testnet.

pub mod config;
pub mod error;
pub mod key;
pub mod logging;
pub mod routes;
pub mod rpc;
pub mod transfer;
