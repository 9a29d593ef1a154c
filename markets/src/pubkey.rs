//! Account addresses.
//!
//! Keys are `solana_sdk` pubkeys. Their serde form is a byte array, so JSON
//! records that carry keys use the base58 helpers below.

pub use solana_sdk::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::error::{MarketsError, Result};

/// Parse a base58 address, keeping the offending text in the error.
pub fn parse_pubkey(s: &str) -> Result<Pubkey> {
    s.parse()
        .map_err(|e| MarketsError::InvalidPubkey(format!("{s}: {e}")))
}

/// `#[serde(with = "base58")]` for a `Pubkey` field.
pub mod base58 {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Pubkey;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_pubkey(&s).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = "base58_option")]` for an `Option<Pubkey>` field.
pub mod base58_option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Pubkey;

    pub fn serialize<S: Serializer>(key: &Option<Pubkey>, serializer: S) -> Result<S::Ok, S::Error> {
        match key {
            Some(key) => serializer.collect_str(key),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Pubkey>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_pubkey(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
