//! 20-byte account/contract address with `0x` hex encoding.

use blake2::{Blake2b512, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing an address string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be 0x-prefixed hex: {0}")]
    MissingPrefix(String),

    #[error("address must encode exactly 20 bytes, got {0}")]
    WrongLength(usize),

    #[error("invalid hex in address: {0}")]
    InvalidHex(String),
}

/// An account, token-contract, or adapter address.
///
/// Addresses identify every participant in the system: user accounts,
/// base-token ledgers, synthetic ledgers, governance, and bridge adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derive a deterministic address from a domain tag and input material.
    ///
    /// Blake2b over `domain || material`, truncated to 20 bytes. Used to
    /// assign addresses to auto-deployed bridged token ledgers so both
    /// sides of a bridge pairing agree on the destination address.
    pub fn derive(domain: &[u8], material: &[u8]) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(domain);
        hasher.update(material);
        let digest = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[..20]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s
            .strip_prefix("0x")
            .ok_or_else(|| AddressError::MissingPrefix(s.to_string()))?;
        let bytes =
            hex::decode(stripped).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        let arr: [u8; 20] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::WrongLength(bytes.len()))?;
        Ok(Self(arr))
    }
}
