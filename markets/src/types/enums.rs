use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarketsError;

/// Quote currency an order book is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCurrency {
    Usdc,
    Usdt,
}

impl QuoteCurrency {
    /// Fixed routing preference: USDC before USDT.
    pub const PRECEDENCE: [QuoteCurrency; 2] = [QuoteCurrency::Usdc, QuoteCurrency::Usdt];
}

impl fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteCurrency::Usdc => write!(f, "USDC"),
            QuoteCurrency::Usdt => write!(f, "USDT"),
        }
    }
}

impl FromStr for QuoteCurrency {
    type Err = MarketsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usdc" => Ok(QuoteCurrency::Usdc),
            "usdt" => Ok(QuoteCurrency::Usdt),
            other => Err(MarketsError::Validation(format!(
                "unknown quote currency: {other}"
            ))),
        }
    }
}

/// Solana cluster a token list entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
}

impl Cluster {
    /// Chain id used by the SPL token registry.
    pub fn chain_id(self) -> u64 {
        match self {
            Cluster::MainnetBeta => 101,
            Cluster::Testnet => 102,
            Cluster::Devnet => 103,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Cluster {
    type Err = MarketsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            other => Err(MarketsError::Validation(format!("unknown cluster: {other}"))),
        }
    }
}
