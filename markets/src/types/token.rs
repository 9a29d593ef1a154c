use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::pubkey::{base58, base58_option, parse_pubkey, Pubkey};
use crate::types::{Cluster, QuoteCurrency};

/// A token list document as published by the SPL token registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenList {
    #[serde(default)]
    pub name: Option<String>,
    pub tokens: Vec<TokenInfo>,
}

impl TokenList {
    /// Entries belonging to `cluster`, in document order.
    pub fn filter_by_cluster(&self, cluster: Cluster) -> Vec<TokenInfo> {
        let chain_id = cluster.chain_id();
        self.tokens
            .iter()
            .filter(|t| t.chain_id == chain_id)
            .cloned()
            .collect()
    }
}

/// A single registry record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<TokenExtensions>,
}

/// Registry extension fields. Keys not listed here are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_v3_usdc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_v3_usdt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Quoted order-book markets for one token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedMarkets {
    #[serde(with = "base58_option", default, skip_serializing_if = "Option::is_none")]
    pub usdc: Option<Pubkey>,
    #[serde(with = "base58_option", default, skip_serializing_if = "Option::is_none")]
    pub usdt: Option<Pubkey>,
}

impl QuotedMarkets {
    pub fn get(&self, quote: QuoteCurrency) -> Option<Pubkey> {
        match quote {
            QuoteCurrency::Usdc => self.usdc,
            QuoteCurrency::Usdt => self.usdt,
        }
    }

    pub fn is_quoted(&self) -> bool {
        self.usdc.is_some() || self.usdt.is_some()
    }
}

/// Routing view of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(with = "base58")]
    pub address: Pubkey,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub quoted_markets: QuotedMarkets,
}

impl TokenMetadata {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl TryFrom<&TokenInfo> for TokenMetadata {
    type Error = crate::error::MarketsError;

    /// Fails on an unparsable mint. Unparsable market addresses are dropped.
    fn try_from(info: &TokenInfo) -> Result<Self> {
        let address = parse_pubkey(&info.address)?;
        let ext = info.extensions.clone().unwrap_or_default();
        let quoted_markets = QuotedMarkets {
            usdc: parse_market(&info.symbol, "serumV3Usdc", ext.serum_v3_usdc.as_deref()),
            usdt: parse_market(&info.symbol, "serumV3Usdt", ext.serum_v3_usdt.as_deref()),
        };
        Ok(Self {
            address,
            symbol: info.symbol.clone(),
            name: info.name.clone(),
            decimals: info.decimals,
            tags: info.tags.clone(),
            quoted_markets,
        })
    }
}

fn parse_market(symbol: &str, field: &str, raw: Option<&str>) -> Option<Pubkey> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_pubkey(raw) {
        Ok(key) => Some(key),
        Err(e) => {
            warn!(symbol, field, error = %e, "ignoring malformed market address");
            None
        }
    }
}
