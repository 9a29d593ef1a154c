use serde::{Deserialize, Serialize};

use crate::pubkey::{base58, Pubkey};

/// An existing open-orders account on the order-book program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrdersAccount {
    #[serde(with = "base58")]
    pub address: Pubkey,
    #[serde(with = "base58")]
    pub market: Pubkey,
    #[serde(with = "base58")]
    pub owner: Pubkey,
}
