//! Wallet identity and connection snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, Result};

/// A validated base58 Solana public key (wallet address or token mint).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey(String);

impl PublicKey {
    /// Parse a base58 public key, rejecting anything that does not decode to 32 bytes.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        lib_utils::validate_pubkey(value, "public key").map_err(AppError::InvalidInput)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

/// Connection state as reported by the wallet provider.
///
/// Providers can report `connected` before a public key is available, so the
/// key stays optional even when the flag is set. Use [`WalletSnapshot::identity`]
/// rather than reading the fields directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSnapshot {
    pub connected: bool,
    pub public_key: Option<PublicKey>,
}

impl WalletSnapshot {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(public_key: PublicKey) -> Self {
        Self {
            connected: true,
            public_key: Some(public_key),
        }
    }

    /// The wallet identity, present only when connected and a key was reported.
    pub fn identity(&self) -> Option<&PublicKey> {
        if self.connected {
            self.public_key.as_ref()
        } else {
            None
        }
    }

    /// Connected, but the provider has not handed over a public key.
    pub fn is_awaiting_identity(&self) -> bool {
        self.connected && self.public_key.is_none()
    }
}
