/// Faucet endpoint. Relative by default so the static host can proxy to the
/// serverless handler; override at build time via FAUCET_URL.
pub const FAUCET_URL: &str = match option_env!("FAUCET_URL") {
    Some(url) => url,
    None => "/api/faucet",
};

/// Testnet fullnode used for read-only queries (owned objects).
pub const FULLNODE_URL: &str = match option_env!("FULLNODE_URL") {
    Some(url) => url,
    None => "https://fullnode.testnet.sui.io:443",
};

/// OAuth client for the Google login path.
pub const GOOGLE_CLIENT_ID: &str = match option_env!("GOOGLE_CLIENT_ID") {
    Some(id) => id,
    None => "ensoku-dev.apps.googleusercontent.com",
};

/// On-chain target of the mint call: `{PACKAGE_ID}::{MODULE_NAME}::{MINT_FUNCTION}`.
pub const PACKAGE_ID: &str = "0xaa482b655edc850567b18bc546272ac13bb6aee4fb548bdb4d663b67d19a9bfb";
pub const MODULE_NAME: &str = "ensoku";
pub const MINT_FUNCTION: &str = "mint_snack";

// Fixed mint arguments (location, flavor, color) for this excursion spot.
pub const SNACK_LOCATION: &str = "Tokyo";
pub const SNACK_FLAVOR: &str = "Sakura Mochi";
pub const SNACK_COLOR: &str = "#FFB7C5";

/// Delay before the simulated-success banner when the faucet endpoint is not
/// deployed (local development).
pub const FAUCET_SIMULATION_DELAY_MS: u32 = 1_000;

/// Delay before the simulated mint result on the zkLogin path (no signer
/// available until delegated/ephemeral keys are supported).
pub const MINT_SIMULATION_DELAY_MS: u32 = 2_000;
