use serde::Deserialize;

/// The three phases of the excursion. `Departure` is the login screen,
/// `Excursion` the main activity screen, `Home` the summary/exit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Departure,
    Excursion,
    Home,
}

impl Screen {
    /// Reducer applied on every session-address change: an address always
    /// lands the user on the excursion screen, losing it sends them back to
    /// departure. User navigation (home / keep playing) never goes through
    /// here.
    pub fn on_address_change(address: Option<&str>) -> Screen {
        if address.is_some() {
            Screen::Excursion
        } else {
            Screen::Departure
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Status banner shown above the active screen. Replaced, never queued:
/// every settled operation overwrites whatever was there before.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }
}

/// Where the current session address came from. A connected wallet can sign
/// transactions; a zkLogin-derived address cannot (yet), so the mint path
/// simulates instead of submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressOrigin {
    Wallet,
    ZkLogin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub address: String,
    pub origin: AddressOrigin,
}

/// One minted snack owned by the session address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnedSnack {
    pub object_id: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaucetResponse {
    pub success: bool,
    pub digest: Option<String>,
}
