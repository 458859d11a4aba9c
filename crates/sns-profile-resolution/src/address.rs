//! Wallet addresses and domain account keys
//!
//! Both are 32-byte Ed25519 public keys whose canonical text form is base58.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Public key length in bytes
pub const PUBKEY_LEN: usize = 32;

fn decode_pubkey(kind: &str, encoded: &str) -> Result<[u8; PUBKEY_LEN]> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAddress(format!("Empty {}", kind)));
    }

    let bytes = bs58::decode(trimmed)
        .into_vec()
        .map_err(|e| Error::InvalidAddress(format!("Invalid {} '{}': {}", kind, trimmed, e)))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        Error::InvalidAddress(format!(
            "Invalid {} length: expected {} bytes, got {}",
            kind,
            PUBKEY_LEN,
            bytes.len()
        ))
    })
}

macro_rules! pubkey_type {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; PUBKEY_LEN]);

        impl $name {
            /// Wrap raw key bytes
            pub const fn from_bytes(bytes: [u8; PUBKEY_LEN]) -> Self {
                Self(bytes)
            }

            /// Raw key bytes
            pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
                &self.0
            }

            /// Canonical base58 encoding
            pub fn to_base58(&self) -> String {
                bs58::encode(self.0).into_string()
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                decode_pubkey($kind, s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_base58())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_base58())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_base58())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let encoded = String::deserialize(deserializer)?;
                encoded.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pubkey_type!(
    /// Public key of the connected wallet
    WalletAddress,
    "wallet address"
);

pubkey_type!(
    /// On-chain account key of a registered domain
    DomainKey,
    "domain key"
);

/// Sort domain keys by their base58 text and return the first.
///
/// Ordering is on the canonical string, not the raw bytes, so the pick is
/// independent of the order the keys were enumerated in.
pub fn first_by_base58(keys: &[DomainKey]) -> Option<DomainKey> {
    keys.iter()
        .map(|key| (key.to_base58(), *key))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, key)| key)
}
