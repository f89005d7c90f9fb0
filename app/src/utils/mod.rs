// Utils compartidos

pub mod constants;
pub mod format;
pub mod wallet_ffi;

pub use constants::*;
pub use format::*;
