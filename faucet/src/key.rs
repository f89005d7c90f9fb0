//! Decoding and use of the server-held signing key. Only the Ed25519 scheme
//! is supported; any other flag in the `suiprivkey` payload is rejected.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bech32::FromBase32;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer, SigningKey};

type Blake2b256 = Blake2b<U32>;

pub const SUI_PRIV_KEY_PREFIX: &str = "suiprivkey";

/// Signature-scheme flag for Ed25519, used both in the encoded secret and in
/// the serialized signature envelope.
pub const ED25519_FLAG: u8 = 0x00;

/// Intent prefix for transaction data: scope, version, app.
const TRANSACTION_DATA_INTENT: [u8; 3] = [0, 0, 0];

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("invalid key encoding: {0}")]
    Encoding(#[from] bech32::Error),
    #[error("unexpected key prefix '{0}', expected '{SUI_PRIV_KEY_PREFIX}'")]
    WrongPrefix(String),
    #[error("invalid key payload length {0}, expected 33 bytes (flag + secret)")]
    BadLength(usize),
    #[error("Only ED25519 keys are supported for now (scheme flag {0:#04x})")]
    UnsupportedScheme(u8),
    #[error("invalid transaction bytes: {0}")]
    InvalidTxBytes(#[from] base64::DecodeError),
}

pub struct FaucetKeypair {
    signing: SigningKey,
}

impl FaucetKeypair {
    /// Decode a bech32 `suiprivkey...` secret. The payload is one scheme
    /// flag byte followed by the 32-byte secret.
    pub fn decode(encoded: &str) -> Result<Self, KeyError> {
        let (prefix, data, _variant) = bech32::decode(encoded.trim())?;
        if prefix != SUI_PRIV_KEY_PREFIX {
            return Err(KeyError::WrongPrefix(prefix));
        }

        let bytes = Vec::<u8>::from_base32(&data)?;
        if bytes.len() != 33 {
            return Err(KeyError::BadLength(bytes.len()));
        }
        if bytes[0] != ED25519_FLAG {
            return Err(KeyError::UnsupportedScheme(bytes[0]));
        }

        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes[1..]);
        Ok(Self { signing: SigningKey::from_bytes(&secret) })
    }

    /// Chain address of the signer: Blake2b-256 over the scheme flag and the
    /// public key.
    pub fn address(&self) -> String {
        let mut hasher = Blake2b256::new();
        hasher.update([ED25519_FLAG]);
        hasher.update(self.signing.verifying_key().as_bytes());
        format!("0x{}", hex::encode(hasher.finalize()))
    }

    /// Sign base64 transaction bytes returned by the fullnode: hash the
    /// intent message with Blake2b-256, sign the digest, serialize as
    /// `flag || signature || public key`, base64.
    pub fn sign_transaction(&self, tx_bytes_b64: &str) -> Result<String, KeyError> {
        let raw = BASE64.decode(tx_bytes_b64)?;

        let mut message = Vec::with_capacity(TRANSACTION_DATA_INTENT.len() + raw.len());
        message.extend_from_slice(&TRANSACTION_DATA_INTENT);
        message.extend_from_slice(&raw);

        let mut hasher = Blake2b256::new();
        hasher.update(&message);
        let digest = hasher.finalize();

        let signature = self.signing.sign(&digest);

        let mut envelope = Vec::with_capacity(1 + 64 + 32);
        envelope.push(ED25519_FLAG);
        envelope.extend_from_slice(&signature.to_bytes());
        envelope.extend_from_slice(self.signing.verifying_key().as_bytes());
        Ok(BASE64.encode(envelope))
    }
}
